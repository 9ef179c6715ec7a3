mod loader;

pub use loader::{DEFAULT_QUESTIONS_PATH, load_quiz_data_from_json, parse_quiz_data};
