//! Quiz types and scoring.

use serde::{Deserialize, Serialize};

/// A multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    /// Zero-based index into `options`.
    pub answer: usize,
    pub explanation: String,
}

/// A module's quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub module_id: u32,
    pub title: String,
    pub questions: Vec<Question>,
}

/// The outcome of grading one quiz attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizScore {
    pub correct: u32,
    pub total: u32,
    pub percent: u32,
}

/// Grade an answer sheet against a quiz.
///
/// `answers[i]` is the picked option index for question `i`. Missing or
/// out-of-range picks count as wrong; surplus answers are ignored.
pub fn grade(quiz: &Quiz, answers: &[usize]) -> QuizScore {
    let total = quiz.questions.len() as u32;
    let correct = quiz
        .questions
        .iter()
        .enumerate()
        .filter(|(i, q)| answers.get(*i) == Some(&q.answer))
        .count() as u32;
    let percent = if total == 0 {
        0
    } else {
        (correct * 100 + total / 2) / total
    };
    QuizScore {
        correct,
        total,
        percent,
    }
}
