use jiff::ToSpan;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use aramesh_core::models::stress::StressLogEntry;

/// Averages over a set of stress log entries.
///
/// Sleep and activity are optional per entry; absent values count as zero in
/// their averages, matching how the report summary block has always read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressSummary {
    pub count: usize,
    pub average_stress: f64,
    pub average_sleep_hours: f64,
    pub average_activity_minutes: f64,
}

/// Summarize every entry in the slice. `None` when the slice is empty —
/// never a zero average.
pub fn summarize_logs(logs: &[StressLogEntry]) -> Option<StressSummary> {
    if logs.is_empty() {
        return None;
    }
    let count = logs.len();
    let n = count as f64;
    let stress: u32 = logs.iter().map(|l| u32::from(l.stress_level)).sum();
    let sleep: f64 = logs.iter().filter_map(|l| l.sleep_hours).sum();
    let activity: u32 = logs.iter().filter_map(|l| l.physical_activity_minutes).sum();

    Some(StressSummary {
        count,
        average_stress: f64::from(stress) / n,
        average_sleep_hours: sleep / n,
        average_activity_minutes: f64::from(activity) / n,
    })
}

/// Summarize entries dated within `[today - window_days, today]`.
pub fn summarize_window(
    logs: &[StressLogEntry],
    today: Date,
    window_days: i64,
) -> Option<StressSummary> {
    let start = today
        .checked_sub(window_days.days())
        .unwrap_or(Date::MIN);
    let windowed: Vec<StressLogEntry> = logs
        .iter()
        .filter(|l| l.date >= start && l.date <= today)
        .cloned()
        .collect();
    summarize_logs(&windowed)
}
