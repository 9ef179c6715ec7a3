//! # quiz-prep
//!
//! Exam-prep quizzes in the terminal: pick a course and a module, answer the
//! questions, and get a score.
//!
//! The session logic lives in [`session`] and has no terminal dependency, so it
//! can drive any front end.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_prep::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Load the question bank from a JSON file
//!     let quiz = Quiz::from_json("ccna_questions_by_exam.json")?;
//!
//!     // Run the quiz in the terminal
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod error;
mod models;
pub mod session;
pub mod terminal;
mod ui;

use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tracing::info;

pub use app::{App, Pane};
pub use data::{DEFAULT_QUESTIONS_PATH, load_quiz_data_from_json, parse_quiz_data};
pub use error::{LoadError, QuizError, SessionError};
pub use models::{
    Answer, AppState, Course, Module, OptionId, Question, QuestionIssue, QuestionType, QuizData,
    QuizOption,
};

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    pub fn new(data: QuizData) -> Self {
        Self {
            app: App::new(data),
        }
    }

    /// A quiz that only shows the "no data" screen.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            app: App::no_data(reason),
        }
    }

    /// Load a quiz from a JSON question bank.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use quiz_prep::Quiz;
    ///
    /// let quiz = Quiz::from_json("ccna_questions_by_exam.json").expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let data = load_quiz_data_from_json(path)?;
        Ok(Self::new(data))
    }

    /// Skip the selection screen and begin `module` of `course`.
    pub fn start(&mut self, course: &str, module: &str) -> Result<(), SessionError> {
        self.app.session_mut().start(course, module)
    }

    /// Run the quiz in the terminal.
    ///
    /// This takes over the terminal and returns when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        info!("quiz closed");
        result
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::QuizTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return true;
    }

    match app.state() {
        AppState::Selection => handle_selection_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Result => handle_result_input(app, key),
        AppState::NoData => {}
    }
    false
}

fn handle_selection_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_entry(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_entry(),
        KeyCode::Tab | KeyCode::BackTab => app.switch_pane(),
        KeyCode::Enter => app.confirm_selection(),
        _ => {}
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Char(digit @ '0'..='9') => app.push_jump_digit(digit),
        KeyCode::Enter => {
            if !app.commit_jump() {
                app.choose_option();
            }
        }
        KeyCode::Char(' ') => app.choose_option(),
        KeyCode::Left | KeyCode::Char('h') => app.previous_question(),
        KeyCode::Right | KeyCode::Char('l') => app.next_or_submit(),
        KeyCode::Char('e') => app.toggle_explanation(),
        KeyCode::Char('s') => app.submit(),
        KeyCode::Char('v') => app.reopen_results(),
        KeyCode::Char('r') => app.restart(),
        KeyCode::Esc => {
            if !app.cancel_jump() {
                app.back_to_selection();
            }
        }
        KeyCode::Char('b') => app.back_to_selection(),
        _ => {}
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
        KeyCode::Char('c') | KeyCode::Esc => app.close_results(),
        KeyCode::Char('b') => app.back_to_selection(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: &str = r#"{
        "CCNA 1": {
            "modules": {
                "Module 1": {
                    "questions": [
                        {
                            "question": "One",
                            "options": [{"option": "a", "correct": true}, {"option": "b", "correct": false}],
                            "question_type": "SINGLE_ANSWER"
                        },
                        {
                            "question": "Two",
                            "options": [{"option": "a", "correct": false}, {"option": "b", "correct": true}],
                            "question_type": "SINGLE_ANSWER"
                        }
                    ]
                }
            }
        }
    }"#;

    #[test]
    fn test_key_driven_session() {
        let mut quiz = Quiz::new(parse_quiz_data(DATA).unwrap());
        let app = quiz.app_mut();

        assert!(!handle_input(app, KeyCode::Enter));
        assert!(!handle_input(app, KeyCode::Enter));
        assert_eq!(app.state(), AppState::Quiz);

        handle_input(app, KeyCode::Char(' '));
        handle_input(app, KeyCode::Char('2'));
        handle_input(app, KeyCode::Enter);
        assert_eq!(app.current_question_number(), 2);
        handle_input(app, KeyCode::Char('j'));
        handle_input(app, KeyCode::Char(' '));
        handle_input(app, KeyCode::Char('l'));
        assert_eq!(app.state(), AppState::Result);
        assert_eq!(app.session().score().unwrap().percent, 100.0);

        handle_input(app, KeyCode::Char('c'));
        assert_eq!(app.state(), AppState::Quiz);
        handle_input(app, KeyCode::Char('b'));
        assert_eq!(app.state(), AppState::Selection);

        assert!(handle_input(app, KeyCode::Char('q')));
    }

    #[test]
    fn test_typed_jump_keys() {
        let mut quiz = Quiz::new(models::numbered_module("CCNA 1", "Long", 40));
        quiz.start("CCNA 1", "Long").unwrap();
        let app = quiz.app_mut();

        handle_input(app, KeyCode::Char('4'));
        handle_input(app, KeyCode::Char('0'));
        handle_input(app, KeyCode::Enter);
        assert_eq!(app.current_question_number(), 40);
        assert!(!app.session().is_answered(39));

        handle_input(app, KeyCode::Char('1'));
        handle_input(app, KeyCode::Esc);
        assert_eq!(app.state(), AppState::Quiz);
        handle_input(app, KeyCode::Enter);
        assert!(app.session().is_answered(39));
    }

    #[test]
    fn test_start_directly() {
        let mut quiz = Quiz::new(parse_quiz_data(DATA).unwrap());
        assert!(quiz.start("CCNA 1", "Module 2").is_err());
        quiz.start("CCNA 1", "Module 1").unwrap();
        assert_eq!(quiz.app().state(), AppState::Quiz);
    }

    #[test]
    fn test_no_data_ignores_keys() {
        let mut quiz = Quiz::unavailable("missing");
        assert!(!handle_input(quiz.app_mut(), KeyCode::Enter));
        assert_eq!(quiz.app().state(), AppState::NoData);
    }
}
