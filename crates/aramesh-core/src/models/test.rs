use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A psychometric questionnaire definition. Immutable once created and
/// identified by its unique `code` (e.g. "PSS10").
///
/// `rule` carries the serialized scoring/interpretation policy as stored;
/// parsing it into a typed rule happens in `aramesh-instruments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestDefinition {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub description: String,
    pub question_count: u32,
    pub max_score: i64,
    pub rule: Option<String>,
}

/// A single questionnaire item. `number` is 1-based and unique per test;
/// the length of `options` defines the valid answer-index range
/// `0..options.len()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub test_id: Uuid,
    pub number: u32,
    pub text: String,
    pub options: Vec<String>,
}

impl Question {
    /// Highest valid 0-based answer index for this question.
    pub fn max_answer_index(&self) -> i64 {
        self.options.len() as i64 - 1
    }
}
