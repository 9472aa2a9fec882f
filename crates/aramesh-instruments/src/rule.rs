//! The typed scoring/interpretation rule.
//!
//! Rules are stored on a test definition as a JSON string
//! (`{"method": ..., "reverse_questions": ..., "max_option_value": ...,
//! "thresholds": [...]}`). They are parsed exactly once, here, into a closed
//! variant; everything downstream dispatches on the typed value instead of
//! re-reading the payload on every call.

use std::collections::BTreeSet;

use serde::Deserialize;

use crate::scoring::ScoringIssue;

/// Default answer ceiling for reverse-weighted questions when the payload
/// omits `max_option_value`.
pub const DEFAULT_MAX_OPTION_VALUE: i64 = 3;

/// How raw answer indices combine into a score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoringRule {
    /// Score is the plain sum of answer indices.
    Sum,
    /// Questions listed in `reverse_questions` (1-based numbers) contribute
    /// `max_option_value - answer`; all others contribute `answer`.
    ReverseWeighted {
        reverse_questions: BTreeSet<u32>,
        max_option_value: i64,
    },
}

/// One interpretation band: applies to scores up to and including `max_score`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Band {
    pub max_score: i64,
    pub text: String,
}

/// A fully parsed test rule: the scoring method plus interpretation bands,
/// presorted ascending by `max_score` so resolution never sorts again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRule {
    scoring: ScoringRule,
    bands: Vec<Band>,
}

#[derive(Deserialize)]
struct RawRule {
    #[serde(default)]
    method: Option<String>,
    #[serde(default)]
    reverse_questions: Vec<u32>,
    #[serde(default)]
    max_option_value: Option<i64>,
    #[serde(default)]
    thresholds: Vec<RawBand>,
}

#[derive(Deserialize)]
struct RawBand {
    #[serde(default)]
    max_score: Option<i64>,
    #[serde(default)]
    interpretation: String,
}

impl TestRule {
    /// Plain-sum rule with no interpretation bands.
    pub fn sum() -> Self {
        Self {
            scoring: ScoringRule::Sum,
            bands: Vec::new(),
        }
    }

    /// Parse a stored rule payload.
    ///
    /// Degradation policy: an absent or blank payload is the plain sum rule;
    /// unparseable JSON falls back to sum with a [`ScoringIssue::RuleParse`]
    /// diagnostic; an unrecognized `method` tag falls back to sum with a
    /// [`ScoringIssue::UnknownMethod`] diagnostic but keeps any thresholds.
    /// Nothing here is fatal.
    pub fn parse(raw: Option<&str>) -> (Self, Option<ScoringIssue>) {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return (Self::sum(), None);
        };

        let parsed: RawRule = match serde_json::from_str(raw) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(error = %e, "scoring rule did not parse, falling back to sum");
                return (Self::sum(), Some(ScoringIssue::RuleParse(e.to_string())));
            }
        };

        let mut issue = None;
        let scoring = match parsed.method.as_deref() {
            None | Some("sum") => ScoringRule::Sum,
            Some("reverse") => ScoringRule::ReverseWeighted {
                reverse_questions: parsed.reverse_questions.into_iter().collect(),
                max_option_value: parsed.max_option_value.unwrap_or(DEFAULT_MAX_OPTION_VALUE),
            },
            Some(other) => {
                tracing::warn!(method = other, "unknown scoring method, falling back to sum");
                issue = Some(ScoringIssue::UnknownMethod(other.to_string()));
                ScoringRule::Sum
            }
        };

        // Bands without a threshold are malformed and dropped.
        let mut bands: Vec<Band> = parsed
            .thresholds
            .into_iter()
            .filter_map(|b| {
                b.max_score.map(|max_score| Band {
                    max_score,
                    text: b.interpretation,
                })
            })
            .collect();
        bands.sort_by_key(|b| b.max_score);

        (Self { scoring, bands }, issue)
    }

    pub fn scoring(&self) -> &ScoringRule {
        &self.scoring
    }

    /// Interpretation bands, ascending by `max_score`.
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }
}
