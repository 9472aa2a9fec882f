use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A completed questionnaire submission. Created once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    pub id: Uuid,
    pub user_id: Uuid,
    pub test_id: Uuid,
    pub test_code: String,
    pub test_name: String,
    pub score: i64,
    pub max_score: i64,
    pub percentage: f64,
    pub interpretation: String,
    pub answers: Vec<i64>,
    pub date_taken: jiff::civil::Date,
}

/// Score as a percentage of the maximum, rounded to two decimals.
/// A zero maximum yields 0 rather than dividing by zero.
pub fn percentage(score: i64, max_score: i64) -> f64 {
    if max_score == 0 {
        return 0.0;
    }
    (score as f64 / max_score as f64 * 100.0 * 100.0).round() / 100.0
}

/// Deserialize a persisted answers payload (JSON array of 0-based indices).
///
/// The data layer stores answers as a JSON string; anything malformed reads
/// as an empty list rather than an error.
pub fn parse_answers(raw: &str) -> Vec<i64> {
    serde_json::from_str(raw).unwrap_or_default()
}

/// Serialize answers for persistence.
pub fn answers_payload(answers: &[i64]) -> String {
    serde_json::to_string(answers).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_rounds_to_two_decimals() {
        assert_eq!(percentage(17, 40), 42.5);
        assert_eq!(percentage(1, 3), 33.33);
        assert_eq!(percentage(2, 3), 66.67);
    }

    #[test]
    fn percentage_of_zero_max_is_zero() {
        assert_eq!(percentage(10, 0), 0.0);
    }

    #[test]
    fn malformed_answers_payload_reads_empty() {
        assert!(parse_answers("not json").is_empty());
        assert!(parse_answers("{\"a\":1}").is_empty());
        assert_eq!(parse_answers("[0,1,2]"), vec![0, 1, 2]);
    }
}
