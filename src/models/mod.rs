mod answer;
mod question;

pub use answer::Answer;
pub use question::{
    Course, Module, OptionId, Question, QuestionIssue, QuestionType, QuizData, QuizOption,
};

/// Which screen the terminal app is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Course and module picker.
    Selection,
    Quiz,
    Result,
    /// The question bank could not be loaded.
    NoData,
}

/// A one-course bank whose module holds `count` single-answer questions.
#[cfg(test)]
pub(crate) fn numbered_module(course: &str, module: &str, count: usize) -> QuizData {
    let questions = (1..=count)
        .map(|number| Question {
            text: format!("Question {}", number),
            images: Vec::new(),
            options: vec![
                QuizOption {
                    text: "right".to_string(),
                    is_correct: true,
                },
                QuizOption {
                    text: "wrong".to_string(),
                    is_correct: false,
                },
            ],
            kind: QuestionType::SingleAnswer,
            explanation: String::new(),
        })
        .collect();

    let mut data = QuizData::default();
    data.courses.insert(
        course.to_string(),
        Course {
            course_url: None,
            modules: [(
                module.to_string(),
                Module {
                    module_url: None,
                    questions,
                },
            )]
            .into_iter()
            .collect(),
        },
    );
    data
}
