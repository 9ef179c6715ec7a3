use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::LoadError;
use crate::models::QuizData;

pub const DEFAULT_QUESTIONS_PATH: &str = "ccna_questions_by_exam.json";

pub fn load_quiz_data_from_json<P: AsRef<Path>>(path: P) -> Result<QuizData, LoadError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading question data");

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_quiz_data(&json_content)
}

/// Parse a question bank document. Data with no courses is rejected.
pub fn parse_quiz_data(json_content: &str) -> Result<QuizData, LoadError> {
    let data: QuizData = serde_json::from_str(json_content)?;

    if data.is_empty() {
        return Err(LoadError::Empty);
    }

    report_issues(&data);

    let question_count: usize = data
        .courses
        .values()
        .flat_map(|course| course.modules.values())
        .map(|module| module.question_count())
        .sum();
    info!(
        courses = data.courses.len(),
        questions = question_count,
        "question data loaded"
    );

    Ok(data)
}

// Malformed questions are still served; grading treats them as-is.
fn report_issues(data: &QuizData) {
    for (course_name, course) in &data.courses {
        for (module_name, module) in &course.modules {
            for (index, question) in module.questions.iter().enumerate() {
                if let Some(issue) = question.validate() {
                    warn!(
                        course = %course_name,
                        module = %module_name,
                        question = index + 1,
                        "{}",
                        issue
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "CCNA 1": {
            "course_url": "https://example.com/ccna1",
            "modules": {
                "Module 1": {
                    "module_url": "https://example.com/ccna1/m1",
                    "questions": [
                        {
                            "question": "What is a router?",
                            "images": [],
                            "options": [
                                {"option": "A layer 3 device", "correct": true},
                                {"option": "A layer 1 device", "correct": false}
                            ],
                            "question_type": "SINGLE_ANSWER",
                            "explanation": "Routers forward packets."
                        }
                    ]
                },
                "Module 2": { "questions": [] }
            }
        }
    }"#;

    #[test]
    fn test_parse_sample() {
        let data = parse_quiz_data(SAMPLE).unwrap();
        assert_eq!(data.course_names().collect::<Vec<_>>(), vec!["CCNA 1"]);
        let course = data.course("CCNA 1").unwrap();
        assert_eq!(course.module_names().count(), 2);
        assert_eq!(data.questions("CCNA 1", "Module 1").unwrap().len(), 1);
        assert_eq!(data.questions("CCNA 1", "Module 2").unwrap().len(), 0);
        assert!(data.questions("CCNA 1", "Module 3").is_none());
    }

    #[test]
    fn test_parse_keeps_document_order() {
        let json = r#"{
            "CCNA 3": { "modules": {} },
            "CCNA 1": {
                "modules": {
                    "Modules 1 - 3": { "questions": [] },
                    "Modules 4 - 7": { "questions": [] },
                    "Modules 8 - 10": { "questions": [] },
                    "Modules 11 - 13": { "questions": [] }
                }
            }
        }"#;
        let data = parse_quiz_data(json).unwrap();
        assert_eq!(data.course_names().collect::<Vec<_>>(), vec!["CCNA 3", "CCNA 1"]);
        assert_eq!(
            data.course("CCNA 1").unwrap().module_names().collect::<Vec<_>>(),
            vec!["Modules 1 - 3", "Modules 4 - 7", "Modules 8 - 10", "Modules 11 - 13"]
        );
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(
            parse_quiz_data("{ not json"),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(parse_quiz_data("{}"), Err(LoadError::Empty)));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_quiz_data_from_json("does/not/exist.json");
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }
}
