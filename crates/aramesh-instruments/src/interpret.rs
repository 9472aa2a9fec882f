//! The interpretation resolver: score → human-readable band text.

use crate::rule::TestRule;

/// Resolve the interpretation for a score.
///
/// Bands are presorted ascending at rule-load time, so the first band whose
/// `max_score` covers the score is the tightest match. Thresholds need not be
/// exhaustive: a score above every band resolves to the empty string, which
/// is a valid outcome, not an error. Interpretation is cosmetic and never
/// blocks result creation.
pub fn interpret(rule: &TestRule, score: i64) -> String {
    rule.bands()
        .iter()
        .find(|band| band.max_score >= score)
        .map(|band| band.text.clone())
        .unwrap_or_default()
}
