use tracing::debug;

use crate::models::{Answer, AppState, OptionId, QuestionType, QuizData};
use crate::session::{Phase, Session};

/// Which list has focus on the selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Courses,
    Modules,
}

/// Presentation state around a [`Session`]: cursors, scroll and toggles.
pub struct App {
    session: Session,
    load_error: Option<String>,
    pane: Pane,
    course_cursor: usize,
    module_cursor: usize,
    selected_option: usize,
    show_explanation: bool,
    result_scroll: usize,
    /// Question number being typed for a jump.
    pending_jump: String,
}

impl App {
    pub fn new(data: QuizData) -> Self {
        Self {
            session: Session::new(data),
            load_error: None,
            pane: Pane::Courses,
            course_cursor: 0,
            module_cursor: 0,
            selected_option: 0,
            show_explanation: false,
            result_scroll: 0,
            pending_jump: String::new(),
        }
    }

    /// An app that can only show why the question bank is missing.
    pub fn no_data(reason: impl Into<String>) -> Self {
        Self {
            load_error: Some(reason.into()),
            ..Self::new(QuizData::default())
        }
    }

    pub fn state(&self) -> AppState {
        if self.load_error.is_some() {
            return AppState::NoData;
        }

        match self.session.phase() {
            Phase::Idle => AppState::Selection,
            _ if self.session.show_results() => AppState::Result,
            _ => AppState::Quiz,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn pane(&self) -> Pane {
        self.pane
    }

    pub fn course_names(&self) -> Vec<&str> {
        self.session.data().course_names().collect()
    }

    pub fn module_names(&self) -> Vec<&str> {
        self.highlighted_course()
            .and_then(|name| self.session.data().course(name))
            .map(|course| course.module_names().collect())
            .unwrap_or_default()
    }

    pub fn course_cursor(&self) -> usize {
        self.course_cursor
    }

    pub fn module_cursor(&self) -> usize {
        self.module_cursor
    }

    pub fn highlighted_course(&self) -> Option<&str> {
        self.session.data().course_names().nth(self.course_cursor)
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn show_explanation(&self) -> bool {
        self.show_explanation
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn current_question_number(&self) -> usize {
        self.session.current_index() + 1
    }

    pub fn total_questions(&self) -> usize {
        self.session.questions().len()
    }

    pub fn select_next_entry(&mut self) {
        match self.pane {
            Pane::Courses => {
                let count = self.course_names().len();
                if count > 0 {
                    self.course_cursor = (self.course_cursor + 1) % count;
                    self.module_cursor = 0;
                }
            }
            Pane::Modules => {
                let count = self.module_names().len();
                if count > 0 {
                    self.module_cursor = (self.module_cursor + 1) % count;
                }
            }
        }
    }

    pub fn select_previous_entry(&mut self) {
        match self.pane {
            Pane::Courses => {
                let count = self.course_names().len();
                if count > 0 {
                    self.course_cursor = (self.course_cursor + count - 1) % count;
                    self.module_cursor = 0;
                }
            }
            Pane::Modules => {
                let count = self.module_names().len();
                if count > 0 {
                    self.module_cursor = (self.module_cursor + count - 1) % count;
                }
            }
        }
    }

    pub fn switch_pane(&mut self) {
        self.pane = match self.pane {
            Pane::Courses => Pane::Modules,
            Pane::Modules => Pane::Courses,
        };
    }

    /// Enter on the course list focuses modules; enter on a module starts it.
    pub fn confirm_selection(&mut self) {
        match self.pane {
            Pane::Courses => {
                if !self.module_names().is_empty() {
                    self.pane = Pane::Modules;
                }
            }
            Pane::Modules => {
                let course = self.highlighted_course().map(str::to_string);
                let module = self.module_names().get(self.module_cursor).map(|m| m.to_string());
                if let (Some(course), Some(module)) = (course, module) {
                    self.start_quiz(&course, &module);
                }
            }
        }
    }

    pub fn start_quiz(&mut self, course: &str, module: &str) {
        match self.session.start(course, module) {
            Ok(()) => self.reset_question_view(),
            Err(err) => debug!(%err, "start rejected"),
        }
    }

    pub fn select_next_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.selected_option = (self.selected_option + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.selected_option = (self.selected_option + count - 1) % count;
        }
    }

    /// Pick the highlighted option, or flip it for multiple-answer questions.
    pub fn choose_option(&mut self) {
        let Some(question) = self.session.current_question() else {
            return;
        };
        let index = self.session.current_index();
        let id = OptionId(self.selected_option);
        if question.option(id).is_none() {
            return;
        }

        let kind = question.kind;
        match kind {
            QuestionType::SingleAnswer => self.session.answer_single(index, id),
            QuestionType::MultipleAnswer => {
                let included = !self
                    .session
                    .answer(index)
                    .is_some_and(|answer: &Answer| answer.contains(id));
                self.session.toggle_option(index, id, included);
            }
        }
    }

    pub fn next_question(&mut self) {
        self.session.next();
        self.reset_question_view();
    }

    pub fn previous_question(&mut self) {
        self.session.previous();
        self.reset_question_view();
    }

    pub fn jump_to_question(&mut self, index: usize) {
        if self.session.jump_to(index) {
            self.reset_question_view();
        }
    }

    pub fn pending_jump(&self) -> Option<&str> {
        Some(self.pending_jump.as_str()).filter(|digits| !digits.is_empty())
    }

    pub fn push_jump_digit(&mut self, digit: char) {
        if digit.is_ascii_digit() && self.pending_jump.len() < 4 {
            self.pending_jump.push(digit);
        }
    }

    /// Jump to the typed 1-based question number. Returns false if nothing was typed.
    pub fn commit_jump(&mut self) -> bool {
        let digits = std::mem::take(&mut self.pending_jump);
        if digits.is_empty() {
            return false;
        }
        match digits.parse::<usize>() {
            Ok(number) if number > 0 => self.jump_to_question(number - 1),
            _ => debug!(digits = %digits, "jump ignored"),
        }
        true
    }

    /// Drop a half-typed jump. Returns false if nothing was typed.
    pub fn cancel_jump(&mut self) -> bool {
        let had_digits = !self.pending_jump.is_empty();
        self.pending_jump.clear();
        had_digits
    }

    /// Next question, or submit when already on the last one.
    pub fn next_or_submit(&mut self) {
        let on_last = self.session.state().navigator.is_last();
        if on_last && self.session.phase() == Phase::InProgress {
            self.submit();
        } else {
            self.next_question();
        }
    }

    pub fn submit(&mut self) {
        if self.session.submit().is_some() {
            self.result_scroll = 0;
        }
    }

    pub fn toggle_explanation(&mut self) {
        self.show_explanation = !self.show_explanation;
    }

    pub fn restart(&mut self) {
        self.session.reset();
        self.reset_question_view();
    }

    pub fn back_to_selection(&mut self) {
        self.session.back_to_selection();
        self.pane = Pane::Courses;
        self.reset_question_view();
    }

    pub fn close_results(&mut self) {
        self.session.close_results();
    }

    pub fn reopen_results(&mut self) {
        self.session.reopen_results();
    }

    pub fn scroll_results_down(&mut self) {
        let max_scroll = self.total_questions().saturating_sub(1);
        if self.result_scroll < max_scroll {
            self.result_scroll += 1;
        }
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    fn option_count(&self) -> usize {
        self.session
            .current_question()
            .map_or(0, |question| question.options.len())
    }

    fn reset_question_view(&mut self) {
        self.selected_option = 0;
        self.show_explanation = false;
        self.result_scroll = 0;
        self.pending_jump.clear();
    }
}
