use uuid::Uuid;

use aramesh_core::models::test::{Question, TestDefinition};

use super::PSS_OPTIONS;
use crate::Instrument;

/// PSS-5: short-form Perceived Stress Scale, five items.
/// Items 3 and 4 are positively worded and reverse-weighted.
/// Score range 0–20; higher = more perceived stress.
pub struct Pss5;

const RULE: &str = r#"{
  "method": "reverse",
  "reverse_questions": [3, 4],
  "max_option_value": 3,
  "thresholds": [
    {"max_score": 7, "interpretation": "Low perceived stress"},
    {"max_score": 11, "interpretation": "Moderate perceived stress"},
    {"max_score": 20, "interpretation": "High perceived stress"}
  ]
}"#;

const QUESTIONS: [&str; 5] = [
    "In the last month, how often have you felt that things were out of your control?",
    "In the last month, how often have you felt you could not cope with everything you had to do?",
    "In the last month, how often have you felt calm and relaxed?",
    "In the last month, how often have you felt that you had things under control?",
    "In the last month, how often have you felt your problems were more than you could bear?",
];

impl Instrument for Pss5 {
    fn code(&self) -> &str {
        "PSS5"
    }

    fn name(&self) -> &str {
        "Perceived Stress Scale (PSS-5)"
    }

    fn definition(&self) -> TestDefinition {
        TestDefinition {
            id: Uuid::new_v4(),
            code: self.code().to_string(),
            name: self.name().to_string(),
            description: "Five questions assessing your stress level over the last month."
                .to_string(),
            question_count: QUESTIONS.len() as u32,
            max_score: 20,
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
