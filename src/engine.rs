use rand::seq::IndexedRandom;

use crate::models::{Choice, Question};

/// Owns the loaded question bank and the running score.
///
/// The bank is immutable after construction; the two counters only ever
/// grow and are reset by nothing short of process restart.
pub struct QuizEngine {
    questions: Vec<Question>,
    score: usize,
    total_questions: usize,
}

/// Outcome of a single answer, snapshotted after the counters moved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub correct: bool,
    pub correct_label: Choice,
    pub score: usize,
    pub total: usize,
}

impl Evaluation {
    /// Running percentage. `total` is at least 1 here, since the snapshot
    /// is taken after the answer was counted.
    pub fn percentage(&self) -> f64 {
        self.score as f64 / self.total as f64 * 100.0
    }
}

impl QuizEngine {
    /// An empty vector is a valid zero-question engine; both session modes
    /// refuse to start on it.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            score: 0,
            total_questions: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total_questions(&self) -> usize {
        self.total_questions
    }

    /// Running percentage, or `None` before the first evaluated answer.
    pub fn percentage(&self) -> Option<f64> {
        if self.total_questions == 0 {
            return None;
        }
        Some(self.score as f64 / self.total_questions as f64 * 100.0)
    }

    /// Draws one question uniformly at random, with replacement across
    /// calls. `None` on an empty bank.
    pub fn draw_one(&self) -> Option<&Question> {
        self.questions.choose(&mut rand::rng())
    }

    /// Draws `min(n, bank size)` distinct questions, a uniform sample
    /// without replacement. The returned order is the sampling order, not
    /// the source order.
    pub fn draw_batch(&self, n: usize) -> Vec<Question> {
        self.questions
            .choose_multiple(&mut rand::rng(), n)
            .cloned()
            .collect()
    }

    /// Scores one submitted answer. `total_questions` advances
    /// unconditionally; `score` advances only on a match with the
    /// question's label.
    pub fn evaluate(&mut self, question: &Question, submitted: Choice) -> Evaluation {
        let correct = submitted == question.label;
        self.total_questions += 1;
        if correct {
            self.score += 1;
        }
        Evaluation {
            correct,
            correct_label: question.label,
            score: self.score,
            total: self.total_questions,
        }
    }
}
