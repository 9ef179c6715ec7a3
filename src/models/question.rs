use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One selectable option of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    #[serde(rename = "option")]
    pub text: String,
    #[serde(rename = "correct")]
    pub is_correct: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionType {
    #[serde(rename = "SINGLE_ANSWER")]
    SingleAnswer,
    #[serde(rename = "MULTIPLE_ANSWER")]
    MultipleAnswer,
}

/// Identifies an option by its position within a question.
///
/// Rendered as `option-<index>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OptionId(pub usize);

impl OptionId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "option-{}", self.0)
    }
}

/// Problems with how a question marks its correct options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionIssue {
    NoOptions,
    /// A single-answer question must mark exactly one option correct.
    SingleAnswerCorrectCount(usize),
    NoCorrectOption,
}

impl fmt::Display for QuestionIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionIssue::NoOptions => write!(f, "question has no options"),
            QuestionIssue::SingleAnswerCorrectCount(n) => {
                write!(f, "single-answer question has {} correct options", n)
            }
            QuestionIssue::NoCorrectOption => write!(f, "question has no correct option"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub options: Vec<QuizOption>,
    #[serde(rename = "question_type")]
    pub kind: QuestionType,
    #[serde(default)]
    pub explanation: String,
}

impl Question {
    pub fn option_ids(&self) -> impl Iterator<Item = OptionId> + '_ {
        (0..self.options.len()).map(OptionId)
    }

    pub fn option(&self, id: OptionId) -> Option<&QuizOption> {
        self.options.get(id.index())
    }

    pub fn option_text(&self, id: OptionId) -> Option<&str> {
        self.option(id).map(|option| option.text.as_str())
    }

    pub fn is_correct_option(&self, id: OptionId) -> bool {
        self.option(id).is_some_and(|option| option.is_correct)
    }

    pub fn correct_options(&self) -> impl Iterator<Item = OptionId> + '_ {
        self.options
            .iter()
            .enumerate()
            .filter(|(_, option)| option.is_correct)
            .map(|(index, _)| OptionId(index))
    }

    pub fn correct_count(&self) -> usize {
        self.options.iter().filter(|option| option.is_correct).count()
    }

    /// First image, the only one the views show.
    pub fn image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn validate(&self) -> Option<QuestionIssue> {
        if self.options.is_empty() {
            return Some(QuestionIssue::NoOptions);
        }

        match (self.kind, self.correct_count()) {
            (QuestionType::SingleAnswer, 1) => None,
            (QuestionType::SingleAnswer, n) => Some(QuestionIssue::SingleAnswerCorrectCount(n)),
            (QuestionType::MultipleAnswer, 0) => Some(QuestionIssue::NoCorrectOption),
            (QuestionType::MultipleAnswer, _) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    #[serde(default)]
    pub module_url: Option<String>,
    pub questions: Vec<Question>,
}

impl Module {
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    #[serde(default)]
    pub course_url: Option<String>,
    pub modules: IndexMap<String, Module>,
}

impl Course {
    pub fn module(&self, name: &str) -> Option<&Module> {
        self.modules.get(name)
    }

    pub fn module_names(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }
}

/// The whole question bank, keyed by course name in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizData {
    pub courses: IndexMap<String, Course>,
}

impl QuizData {
    pub fn course(&self, name: &str) -> Option<&Course> {
        self.courses.get(name)
    }

    pub fn course_names(&self) -> impl Iterator<Item = &str> {
        self.courses.keys().map(String::as_str)
    }

    pub fn module(&self, course: &str, module: &str) -> Option<&Module> {
        self.course(course)?.module(module)
    }

    pub fn questions(&self, course: &str, module: &str) -> Option<&[Question]> {
        self.module(course, module)
            .map(|module| module.questions.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
