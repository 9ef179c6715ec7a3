//! The quiz session state machine.
//!
//! `Idle` → `start` → `InProgress` → `submit` → `Completed`. `reset` re-takes the
//! active module, `back_to_selection` returns to `Idle`, and `start` may be
//! called from any phase.

use tracing::{debug, info};

use crate::error::SessionError;
use crate::models::{Answer, OptionId, Question, QuizData};

use super::{AnswerStore, Navigator, Score, score};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    InProgress,
    Completed,
}

/// The course and module a session is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveModule {
    pub course: String,
    pub module: String,
}

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub active: Option<ActiveModule>,
    pub navigator: Navigator,
    pub answers: AnswerStore,
    /// Set once the attempt has been scored.
    pub is_complete: bool,
    pub score: Option<Score>,
    /// Whether the results panel is on screen. Independent of `is_complete`.
    pub show_results: bool,
}

/// Owns the question bank and the only mutable copy of [`SessionState`].
pub struct Session {
    data: QuizData,
    state: SessionState,
}

impl Session {
    pub fn new(data: QuizData) -> Self {
        Self {
            data,
            state: SessionState::default(),
        }
    }

    pub fn data(&self) -> &QuizData {
        &self.data
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        match (&self.state.active, self.state.is_complete) {
            (None, _) => Phase::Idle,
            (Some(_), false) => Phase::InProgress,
            (Some(_), true) => Phase::Completed,
        }
    }

    pub fn active(&self) -> Option<&ActiveModule> {
        self.state.active.as_ref()
    }

    /// Questions of the active module, empty when idle.
    pub fn questions(&self) -> &[Question] {
        self.state
            .active
            .as_ref()
            .and_then(|active| self.data.questions(&active.course, &active.module))
            .unwrap_or(&[])
    }

    pub fn current_index(&self) -> usize {
        self.state.navigator.current()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions().get(self.current_index())
    }

    pub fn answer(&self, index: usize) -> Option<&Answer> {
        self.state.answers.get(index)
    }

    pub fn is_answered(&self, index: usize) -> bool {
        self.state.answers.is_answered(index)
    }

    pub fn answered_count(&self) -> usize {
        self.state.answers.answered_count()
    }

    pub fn score(&self) -> Option<Score> {
        self.state.score
    }

    pub fn score_percent(&self) -> f64 {
        self.state.score.map_or(0.0, |score| score.percent)
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete
    }

    pub fn show_results(&self) -> bool {
        self.state.show_results
    }

    /// Bind a course and module and begin a fresh attempt.
    pub fn start(&mut self, course: &str, module: &str) -> Result<(), SessionError> {
        let found = self
            .data
            .course(course)
            .ok_or_else(|| SessionError::UnknownCourse(course.to_string()))?
            .module(module)
            .ok_or_else(|| SessionError::UnknownModule {
                course: course.to_string(),
                module: module.to_string(),
            })?;

        let total = found.question_count();
        self.state = SessionState {
            active: Some(ActiveModule {
                course: course.to_string(),
                module: module.to_string(),
            }),
            navigator: Navigator::new(total),
            ..SessionState::default()
        };
        info!(course, module, questions = total, "session started");
        Ok(())
    }

    /// Score the attempt and show the results. Only valid while in progress.
    pub fn submit(&mut self) -> Option<Score> {
        if self.phase() != Phase::InProgress {
            debug!(phase = ?self.phase(), "submit ignored");
            return None;
        }

        let result = score(self.questions(), &self.state.answers);
        self.state.score = Some(result);
        self.state.is_complete = true;
        self.state.show_results = true;
        info!(
            correct = result.correct_count,
            total = result.total_count,
            percent = result.percent,
            "session submitted"
        );
        Some(result)
    }

    /// Clear answers and score but keep the active module.
    pub fn reset(&mut self) {
        self.state.answers.clear();
        self.state.navigator.rewind();
        self.state.is_complete = false;
        self.state.score = None;
        self.state.show_results = false;
        debug!("session reset");
    }

    pub fn back_to_selection(&mut self) {
        self.state = SessionState::default();
        debug!("session back to selection");
    }

    /// Hide the results panel. The score stays available.
    pub fn close_results(&mut self) {
        if self.phase() == Phase::Completed {
            self.state.show_results = false;
        }
    }

    pub fn reopen_results(&mut self) {
        if self.phase() == Phase::Completed {
            self.state.show_results = true;
        }
    }

    pub fn next(&mut self) {
        self.state.navigator.next();
    }

    pub fn previous(&mut self) {
        self.state.navigator.previous();
    }

    pub fn jump_to(&mut self, index: usize) -> bool {
        self.state.navigator.jump_to(index)
    }

    pub fn progress_percent(&self) -> f64 {
        self.state.navigator.progress_percent()
    }

    /// Record a single-answer choice. Ignored unless in progress.
    pub fn answer_single(&mut self, index: usize, id: OptionId) {
        if self.accepts_answers() {
            self.state.answers.set_single(index, id);
        }
    }

    /// Add or remove a multiple-answer choice. Ignored unless in progress.
    pub fn toggle_option(&mut self, index: usize, id: OptionId, included: bool) {
        if self.accepts_answers() {
            self.state.answers.toggle_multiple(index, id, included);
        }
    }

    fn accepts_answers(&self) -> bool {
        self.phase() == Phase::InProgress
    }
}
