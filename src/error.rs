use std::path::PathBuf;

use thiserror::Error;

/// Failure to produce a question bank. Nothing is partially loaded.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse question data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("question data contains no courses")]
    Empty,
}

/// Rejected session transition. State is left unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("unknown course: {0}")]
    UnknownCourse(String),
    #[error("unknown module {module} in course {course}")]
    UnknownModule { course: String, module: String },
}

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
