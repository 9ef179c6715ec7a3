use quiz_prep::session::{AnswerStore, Phase, Session, score};
use quiz_prep::{OptionId, QuizData, load_quiz_data_from_json, parse_quiz_data};

const DATA: &str = r#"{
    "Routing": {
        "modules": {
            "Exam": {
                "questions": [
                    {
                        "question": "Q1",
                        "options": [
                            {"option": "right", "correct": true},
                            {"option": "wrong", "correct": false}
                        ],
                        "question_type": "SINGLE_ANSWER"
                    },
                    {
                        "question": "Q2",
                        "options": [
                            {"option": "wrong", "correct": false},
                            {"option": "right", "correct": true}
                        ],
                        "question_type": "SINGLE_ANSWER"
                    },
                    {
                        "question": "Q3",
                        "options": [
                            {"option": "yes", "correct": true},
                            {"option": "no", "correct": false},
                            {"option": "also yes", "correct": true},
                            {"option": "also no", "correct": false}
                        ],
                        "question_type": "MULTIPLE_ANSWER"
                    }
                ]
            }
        }
    }
}"#;

fn data() -> QuizData {
    parse_quiz_data(DATA).unwrap()
}

#[test]
fn test_start_leaves_everything_unanswered() {
    let mut session = Session::new(data());
    session.start("Routing", "Exam").unwrap();
    for index in 0..session.questions().len() {
        assert!(!session.is_answered(index));
    }
}

#[test]
fn test_navigation_never_leaves_bounds() {
    let mut session = Session::new(data());
    session.start("Routing", "Exam").unwrap();
    for step in 0..20 {
        if step % 3 == 0 {
            session.previous();
        } else {
            session.next();
        }
        assert!(session.current_index() < 3);
    }
    assert!(!session.jump_to(3));
    assert!(session.current_index() < 3);
}

#[test]
fn test_mixed_module_scores_one_of_three() {
    let mut session = Session::new(data());
    session.start("Routing", "Exam").unwrap();
    session.answer_single(0, OptionId(0));
    session.answer_single(1, OptionId(0));
    session.toggle_option(2, OptionId(0), true);

    let result = session.submit().unwrap();
    assert_eq!(result.correct_count, 1);
    assert_eq!(result.total_count, 3);
    assert!((result.percent - 33.33).abs() < 0.01);
    assert_eq!(session.phase(), Phase::Completed);
}

#[test]
fn test_multiple_answer_needs_exact_set() {
    let data = data();
    let questions = data.questions("Routing", "Exam").unwrap();

    let mut answers = AnswerStore::new();
    answers.toggle_multiple(2, OptionId(0), true);
    answers.toggle_multiple(2, OptionId(2), true);
    assert_eq!(score(questions, &answers).correct_count, 1);

    answers.toggle_multiple(2, OptionId(1), true);
    assert_eq!(score(questions, &answers).correct_count, 0);
}

#[test]
fn test_reset_then_submit_scores_zero() {
    let mut session = Session::new(data());
    session.start("Routing", "Exam").unwrap();
    session.answer_single(0, OptionId(0));
    session.submit();

    session.reset();
    assert!(!session.is_complete());
    assert_eq!(session.answered_count(), 0);
    assert_eq!(session.active().unwrap().module, "Exam");
    assert_eq!(session.submit().unwrap().correct_count, 0);
}

#[test]
fn test_start_after_submit_begins_fresh_attempt() {
    let mut session = Session::new(data());
    session.start("Routing", "Exam").unwrap();
    session.answer_single(0, OptionId(0));
    session.toggle_option(2, OptionId(2), true);
    session.jump_to(2);
    session.submit();

    session.start("Routing", "Exam").unwrap();
    assert_eq!(session.phase(), Phase::InProgress);
    assert!(!session.is_complete());
    assert!(!session.show_results());
    assert!(session.score().is_none());
    assert_eq!(session.current_index(), 0);
    for index in 0..session.questions().len() {
        assert!(!session.is_answered(index));
    }
}

#[test]
fn test_back_to_selection_unbinds_module() {
    let mut session = Session::new(data());
    session.start("Routing", "Exam").unwrap();
    session.answer_single(0, OptionId(0));
    session.submit();

    session.back_to_selection();
    assert_eq!(session.phase(), Phase::Idle);
    assert!(session.active().is_none());
    assert!(!session.is_complete());
    assert_eq!(session.answered_count(), 0);
    assert!(session.submit().is_none());
}

#[test]
fn test_bundled_question_bank_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/ccna_questions_by_exam.json");
    let data = load_quiz_data_from_json(path).unwrap();
    let course = data.course("CCNA 1: Introduction to Networks").unwrap();
    assert_eq!(course.modules.len(), 2);

    let mut session = Session::new(data.clone());
    let module = course.module_names().next().unwrap().to_string();
    session
        .start("CCNA 1: Introduction to Networks", &module)
        .unwrap();
    assert!(session.current_question().is_some());
}
