//! aramesh-trends
//!
//! Period summaries over stress logs and anxiety results. Read-only over its
//! inputs; every summary distinguishes "no data" from a zero average so
//! callers never mistake an empty period for a calm one.

pub mod anxiety;
pub mod summary;

pub use anxiety::{AnxietySummary, TREND_MINIMUM_RESULTS, TrendReading, recent_trend, summarize_results};
pub use summary::{StressSummary, summarize_logs, summarize_window};
