//! The scoring engine: raw answer indices → numeric score.
//!
//! Pure functions of their inputs. Failures never abort the caller; they
//! degrade to a safe score and are carried as diagnostics on the result so
//! callers can log or surface them.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use aramesh_core::models::result::{self, TestResult};
use aramesh_core::models::test::{Question, TestDefinition};

use crate::interpret::interpret;
use crate::rule::{ScoringRule, TestRule};

/// A recoverable degradation observed while scoring. None of these stop the
/// pipeline; the score they accompany is the degraded-but-safe value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum ScoringIssue {
    #[error("answer count mismatch: {got} answers for {expected} questions")]
    AnswerCountMismatch { expected: usize, got: usize },

    #[error("scoring rule did not parse, fell back to sum: {0}")]
    RuleParse(String),

    #[error("unknown scoring method '{0}', fell back to sum")]
    UnknownMethod(String),

    #[error("answer {value} for question {question} outside 0..={max}")]
    AnswerOutOfRange { question: u32, value: i64, max: i64 },
}

/// A computed score plus any diagnostics gathered along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scored {
    pub score: i64,
    pub issues: Vec<ScoringIssue>,
}

/// Score a set of answers against a parsed rule.
///
/// An answer count that does not match the question count scores as zero
/// with an [`ScoringIssue::AnswerCountMismatch`] diagnostic. Out-of-range
/// answer values are scored as-is but flagged; historical data may contain
/// them and rescoring must stay stable.
pub fn score(rule: &ScoringRule, questions: &[Question], answers: &[i64]) -> Scored {
    if answers.len() != questions.len() {
        tracing::warn!(
            expected = questions.len(),
            got = answers.len(),
            "answer count mismatch, scoring as zero"
        );
        return Scored {
            score: 0,
            issues: vec![ScoringIssue::AnswerCountMismatch {
                expected: questions.len(),
                got: answers.len(),
            }],
        };
    }

    let mut issues = Vec::new();
    let mut total = 0i64;
    for (question, &answer) in questions.iter().zip(answers) {
        let max = question.max_answer_index();
        if answer < 0 || answer > max {
            issues.push(ScoringIssue::AnswerOutOfRange {
                question: question.number,
                value: answer,
                max,
            });
        }
        total += match rule {
            ScoringRule::Sum => answer,
            ScoringRule::ReverseWeighted {
                reverse_questions,
                max_option_value,
            } => {
                if reverse_questions.contains(&question.number) {
                    max_option_value - answer
                } else {
                    answer
                }
            }
        };
    }

    Scored {
        score: total,
        issues,
    }
}

/// The full outcome of evaluating one submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub score: i64,
    pub max_score: i64,
    pub percentage: f64,
    pub interpretation: String,
    pub issues: Vec<ScoringIssue>,
}

/// Run the whole pipeline for one submission: parse the stored rule, score,
/// derive the percentage, resolve the interpretation band.
pub fn evaluate(test: &TestDefinition, questions: &[Question], answers: &[i64]) -> Evaluation {
    let (rule, rule_issue) = TestRule::parse(test.rule.as_deref());
    let mut scored = score(rule.scoring(), questions, answers);
    if let Some(issue) = rule_issue {
        scored.issues.push(issue);
    }

    Evaluation {
        score: scored.score,
        max_score: test.max_score,
        percentage: result::percentage(scored.score, test.max_score),
        interpretation: interpret(&rule, scored.score),
        issues: scored.issues,
    }
}

impl Evaluation {
    /// Materialize this evaluation as a persistable result record.
    pub fn into_result(
        self,
        user_id: Uuid,
        test: &TestDefinition,
        answers: Vec<i64>,
        date_taken: jiff::civil::Date,
    ) -> TestResult {
        TestResult {
            id: Uuid::new_v4(),
            user_id,
            test_id: test.id,
            test_code: test.code.clone(),
            test_name: test.name.clone(),
            score: self.score,
            max_score: self.max_score,
            percentage: self.percentage,
            interpretation: self.interpretation,
            answers,
            date_taken,
        }
    }
}
