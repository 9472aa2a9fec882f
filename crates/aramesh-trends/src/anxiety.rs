use serde::{Deserialize, Serialize};

use aramesh_core::models::result::TestResult;

/// Minimum number of results a trend reading is allowed to draw on.
pub const TREND_MINIMUM_RESULTS: usize = 3;

/// Percentage average above which a trend reads as elevated.
const ELEVATED_PERCENTAGE: f64 = 50.0;

/// Averages over a set of anxiety test results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnxietySummary {
    pub count: usize,
    pub average_score: f64,
    pub average_percentage: f64,
}

/// A trend reading over the most recent results. Fewer than
/// [`TREND_MINIMUM_RESULTS`] qualifying records never yields a partial
/// average — it reads as insufficient data instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TrendReading {
    InsufficientData { available: usize },
    Elevated(AnxietySummary),
    Typical(AnxietySummary),
}

/// Summarize every result in the slice. `None` when the slice is empty.
pub fn summarize_results(results: &[TestResult]) -> Option<AnxietySummary> {
    if results.is_empty() {
        return None;
    }
    let n = results.len() as f64;
    let score: i64 = results.iter().map(|r| r.score).sum();
    let percentage: f64 = results.iter().map(|r| r.percentage).sum();

    Some(AnxietySummary {
        count: results.len(),
        average_score: score as f64 / n,
        average_percentage: percentage / n,
    })
}

/// Read the trend over the first [`TREND_MINIMUM_RESULTS`] entries of a
/// most-recent-first slice.
pub fn recent_trend(results: &[TestResult]) -> TrendReading {
    if results.len() < TREND_MINIMUM_RESULTS {
        return TrendReading::InsufficientData {
            available: results.len(),
        };
    }
    match summarize_results(&results[..TREND_MINIMUM_RESULTS]) {
        Some(summary) if summary.average_percentage > ELEVATED_PERCENTAGE => {
            TrendReading::Elevated(summary)
        }
        Some(summary) => TrendReading::Typical(summary),
        None => TrendReading::InsufficientData {
            available: results.len(),
        },
    }
}
