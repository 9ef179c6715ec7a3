//! Grading of a module's answers.
//!
//! Multiple-answer questions use exact-match grading: the selection must equal
//! the set of correct options. Partial matches only show up in [`Feedback`],
//! which is for display and never changes a [`Score`].

use crate::models::{Answer, Question, QuestionType};

use super::AnswerStore;

/// Percentage at or above which an attempt counts as passed.
pub const PASS_PERCENT: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub correct_count: usize,
    pub total_count: usize,
    pub percent: f64,
}

impl Score {
    pub fn passed(&self) -> bool {
        self.percent >= PASS_PERCENT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Correct,
    Incorrect,
    Unanswered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    /// Some but not exactly the correct options were selected.
    Partial,
    Incorrect,
    Unanswered,
}

/// Score every question. Unanswered questions count toward the total as incorrect.
pub fn score(questions: &[Question], answers: &AnswerStore) -> Score {
    let total_count = questions.len();
    let correct_count = questions
        .iter()
        .enumerate()
        .filter(|(index, question)| grade(question, answers.get(*index)) == Grade::Correct)
        .count();

    Score {
        correct_count,
        total_count,
        percent: percentage(correct_count, total_count),
    }
}

pub fn grade(question: &Question, answer: Option<&Answer>) -> Grade {
    let Some(answer) = answer.filter(|answer| !answer.is_empty()) else {
        return Grade::Unanswered;
    };

    let is_correct = match (question.kind, answer) {
        (QuestionType::SingleAnswer, Answer::Single(id)) => {
            let expected = question.correct_options().next();
            match (expected, question.option_text(*id)) {
                (Some(expected), Some(selected)) => question.option_text(expected) == Some(selected),
                _ => false,
            }
        }
        (QuestionType::MultipleAnswer, Answer::Multiple(ids)) => {
            ids.len() == question.correct_count()
                && ids.iter().all(|id| question.is_correct_option(*id))
        }
        _ => false,
    };

    if is_correct {
        Grade::Correct
    } else {
        Grade::Incorrect
    }
}

pub fn feedback(question: &Question, answer: Option<&Answer>) -> Feedback {
    match grade(question, answer) {
        Grade::Correct => Feedback::Correct,
        Grade::Unanswered => Feedback::Unanswered,
        Grade::Incorrect => match answer {
            Some(Answer::Multiple(ids))
                if question.kind == QuestionType::MultipleAnswer
                    && ids.iter().any(|id| question.is_correct_option(*id)) =>
            {
                Feedback::Partial
            }
            _ => Feedback::Incorrect,
        },
    }
}

fn percentage(correct: usize, total: usize) -> f64 {
    if total > 0 {
        (correct as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OptionId, QuizOption};

    fn question(kind: QuestionType, flags: &[bool]) -> Question {
        Question {
            text: "Q".to_string(),
            images: Vec::new(),
            options: flags
                .iter()
                .enumerate()
                .map(|(i, &is_correct)| QuizOption {
                    text: format!("option text {}", i),
                    is_correct,
                })
                .collect(),
            kind,
            explanation: String::new(),
        }
    }

    fn multi(ids: &[usize]) -> Answer {
        Answer::Multiple(ids.iter().copied().map(OptionId).collect())
    }

    #[test]
    fn test_single_answer_grading() {
        let q = question(QuestionType::SingleAnswer, &[false, true, false]);
        assert_eq!(grade(&q, Some(&Answer::Single(OptionId(1)))), Grade::Correct);
        assert_eq!(grade(&q, Some(&Answer::Single(OptionId(0)))), Grade::Incorrect);
        assert_eq!(grade(&q, Some(&Answer::Single(OptionId(9)))), Grade::Incorrect);
        assert_eq!(grade(&q, None), Grade::Unanswered);
    }

    #[test]
    fn test_multiple_answer_exact_match() {
        let q = question(QuestionType::MultipleAnswer, &[true, false, true, false]);
        assert_eq!(grade(&q, Some(&multi(&[0, 2]))), Grade::Correct);
        assert_eq!(grade(&q, Some(&multi(&[0]))), Grade::Incorrect);
        assert_eq!(grade(&q, Some(&multi(&[0, 1, 2]))), Grade::Incorrect);
        assert_eq!(grade(&q, Some(&multi(&[]))), Grade::Unanswered);
    }

    #[test]
    fn test_mismatched_answer_kind() {
        let single = question(QuestionType::SingleAnswer, &[true, false]);
        let multiple = question(QuestionType::MultipleAnswer, &[true, false]);
        assert_eq!(grade(&single, Some(&multi(&[0]))), Grade::Incorrect);
        assert_eq!(grade(&multiple, Some(&Answer::Single(OptionId(0)))), Grade::Incorrect);
    }

    #[test]
    fn test_partial_feedback_does_not_score() {
        let q = question(QuestionType::MultipleAnswer, &[true, false, true, false]);
        assert_eq!(feedback(&q, Some(&multi(&[0]))), Feedback::Partial);
        assert_eq!(feedback(&q, Some(&multi(&[1]))), Feedback::Incorrect);
        assert_eq!(feedback(&q, Some(&multi(&[0, 2]))), Feedback::Correct);

        let mut answers = AnswerStore::new();
        answers.toggle_multiple(0, OptionId(0), true);
        let result = score(std::slice::from_ref(&q), &answers);
        assert_eq!(result.correct_count, 0);
        assert_eq!(result.percent, 0.0);
    }

    #[test]
    fn test_score_is_idempotent() {
        let questions = vec![
            question(QuestionType::SingleAnswer, &[true, false]),
            question(QuestionType::SingleAnswer, &[false, true]),
        ];
        let mut answers = AnswerStore::new();
        answers.set_single(0, OptionId(0));

        let first = score(&questions, &answers);
        let second = score(&questions, &answers);
        assert_eq!(first, second);
        assert_eq!(first.correct_count, 1);
        assert_eq!(first.total_count, 2);
        assert_eq!(first.percent, 50.0);
    }

    #[test]
    fn test_score_empty_module() {
        let result = score(&[], &AnswerStore::new());
        assert_eq!(result.total_count, 0);
        assert_eq!(result.percent, 0.0);
        assert!(!result.passed());
    }

    #[test]
    fn test_passed_threshold() {
        let score = |percent| Score {
            correct_count: 0,
            total_count: 0,
            percent,
        };
        assert!(score(70.0).passed());
        assert!(!score(69.9).passed());
    }
}
