use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Difficulty levels understood by the generation service.
pub const DIFFICULTY_LEVELS: [&str; 4] = ["easy", "moderate", "challenging", "hard"];

/// Request body for the generation service. Every field is sent verbatim as
/// text, including the question count - the service does its own validation.
#[derive(Debug, Clone, Serialize)]
pub struct QuizRequest {
    pub keyword: String,
    pub difficulty_level: String,
    pub num_mcqs: String,
}

/// A multiple-choice question as returned by the generation service.
/// Read-only after receipt.
#[derive(Debug, Clone, Deserialize)]
pub struct Mcq {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    #[serde(default)]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreSummary {
    pub correct: usize,
    pub total: usize,
}

impl ScoreSummary {
    /// Percentage of correct answers, or None when nothing was graded so the
    /// display never has to show a non-finite value.
    pub fn percentage(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.correct as f64 / self.total as f64 * 100.0)
        }
    }
}

/// One rendered quiz. `correct_answers` stays index-aligned with `questions`;
/// response items in a malformed shape appear in neither, so both sequences
/// may be shorter than what the service sent. Replaced wholesale when a new
/// request succeeds.
#[derive(Debug)]
pub struct QuizSession {
    pub questions: Vec<Mcq>,
    pub correct_answers: Vec<String>,
    pub selections: Vec<Option<usize>>,
    pub focused: usize,
    pub graded: bool,
    pub score: Option<ScoreSummary>,
    pub scroll_y: u16,
}

#[derive(Debug)]
pub enum GenRequest {
    Generate { request_id: u64, request: QuizRequest },
}

#[derive(Debug)]
pub enum GenReply {
    Questions { request_id: u64, items: Vec<Value> },
    Failure { request_id: u64, message: String },
}

impl GenReply {
    pub fn request_id(&self) -> u64 {
        match self {
            GenReply::Questions { request_id, .. } | GenReply::Failure { request_id, .. } => {
                *request_id
            }
        }
    }
}
