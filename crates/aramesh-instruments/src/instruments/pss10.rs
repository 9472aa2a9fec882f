use uuid::Uuid;

use aramesh_core::models::test::{Question, TestDefinition};

use super::PSS_OPTIONS;
use crate::Instrument;

/// PSS-10: Perceived Stress Scale, ten items over the last month.
/// Items 3 and 5 are positively worded and reverse-weighted.
/// Score range 0–40; higher = more perceived stress.
pub struct Pss10;

const RULE: &str = r#"{
  "method": "reverse",
  "reverse_questions": [3, 5],
  "max_option_value": 3,
  "thresholds": [
    {"max_score": 13, "interpretation": "Low perceived stress"},
    {"max_score": 26, "interpretation": "Moderate perceived stress"},
    {"max_score": 40, "interpretation": "High perceived stress"}
  ]
}"#;

const QUESTIONS: [&str; 10] = [
    "In the last month, how often have you felt unable to control the important things in your life?",
    "In the last month, how often have you felt nervous and under pressure?",
    "In the last month, how often have you felt that things were going your way?",
    "In the last month, how often have you felt you could not overcome accumulating problems?",
    "In the last month, how often have you felt that things were under your control?",
    "In the last month, how often have you felt confident in your ability to handle problems?",
    "In the last month, how often have you felt you could not calm down?",
    "In the last month, how often have you felt that things kept happening that made you lose your temper?",
    "In the last month, how often have you felt unable to keep everything under control?",
    "In the last month, how often have you felt that problems piled up so high you could not get things done?",
];

impl Instrument for Pss10 {
    fn code(&self) -> &str {
        "PSS10"
    }

    fn name(&self) -> &str {
        "Perceived Stress Scale (PSS-10)"
    }

    fn definition(&self) -> TestDefinition {
        TestDefinition {
            id: Uuid::new_v4(),
            code: self.code().to_string(),
            name: self.name().to_string(),
            description: "Ten questions assessing your stress level over the last month."
                .to_string(),
            question_count: QUESTIONS.len() as u32,
            max_score: 40,
            rule: Some(RULE.to_string()),
        }
    }

    fn questions(&self, test_id: Uuid) -> Vec<Question> {
        QUESTIONS
            .iter()
            .enumerate()
            .map(|(i, text)| Question {
                test_id,
                number: i as u32 + 1,
                text: (*text).to_string(),
                options: PSS_OPTIONS.iter().map(|o| (*o).to_string()).collect(),
            })
            .collect()
    }
}
