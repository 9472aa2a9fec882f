use jiff::civil::date;
use uuid::Uuid;

use aramesh_core::models::result::{TestResult, percentage};
use aramesh_core::models::stress::StressLogEntry;
use aramesh_trends::{
    TrendReading, recent_trend, summarize_logs, summarize_results, summarize_window,
};

fn log(d: jiff::civil::Date, level: u8, sleep: Option<f64>, activity: Option<u32>) -> StressLogEntry {
    StressLogEntry::new(d, level, sleep, activity, None).expect("valid level")
}

fn result(score: i64, max_score: i64) -> TestResult {
    TestResult {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        test_id: Uuid::new_v4(),
        test_code: "PSS10".to_string(),
        test_name: "Perceived Stress Scale (PSS-10)".to_string(),
        score,
        max_score,
        percentage: percentage(score, max_score),
        interpretation: String::new(),
        answers: Vec::new(),
        date_taken: date(2026, 8, 20),
    }
}

#[test]
fn empty_logs_summarize_to_none_not_zero() {
    assert_eq!(summarize_logs(&[]), None);
}

#[test]
fn log_summary_averages_all_fields() {
    let logs = vec![
        log(date(2026, 8, 1), 4, Some(8.0), Some(30)),
        log(date(2026, 8, 2), 6, None, Some(10)),
    ];
    let summary = summarize_logs(&logs).expect("two entries");
    assert_eq!(summary.count, 2);
    assert_eq!(summary.average_stress, 5.0);
    assert_eq!(summary.average_sleep_hours, 4.0);
    assert_eq!(summary.average_activity_minutes, 20.0);
}

#[test]
fn window_excludes_entries_older_than_the_range() {
    let today = date(2026, 8, 27);
    let logs = vec![
        log(date(2026, 8, 27), 8, None, None),
        log(date(2026, 8, 21), 4, None, None),
        // Outside a 7-day window.
        log(date(2026, 8, 10), 10, None, None),
    ];

    let summary = summarize_window(&logs, today, 7).expect("two in window");
    assert_eq!(summary.count, 2);
    assert_eq!(summary.average_stress, 6.0);
}

#[test]
fn window_with_no_qualifying_entries_is_none() {
    let today = date(2026, 8, 27);
    let logs = vec![log(date(2026, 1, 1), 5, None, None)];
    assert_eq!(summarize_window(&logs, today, 7), None);
}

#[test]
fn fewer_than_three_results_is_insufficient_data() {
    let results = vec![result(30, 40), result(35, 40)];
    assert_eq!(
        recent_trend(&results),
        TrendReading::InsufficientData { available: 2 }
    );
}

#[test]
fn high_recent_percentages_read_as_elevated() {
    let results = vec![result(30, 40), result(28, 40), result(32, 40)];
    match recent_trend(&results) {
        TrendReading::Elevated(summary) => {
            assert_eq!(summary.count, 3);
            assert_eq!(summary.average_score, 30.0);
            assert_eq!(summary.average_percentage, 75.0);
        }
        other => panic!("expected elevated, got {other:?}"),
    }
}

#[test]
fn trend_reads_only_the_three_most_recent_results() {
    // Older fourth result would drag the average above 50% if counted.
    let results = vec![
        result(10, 40),
        result(12, 40),
        result(14, 40),
        result(40, 40),
    ];
    match recent_trend(&results) {
        TrendReading::Typical(summary) => assert_eq!(summary.count, 3),
        other => panic!("expected typical, got {other:?}"),
    }
}

#[test]
fn result_summary_averages_scores_and_percentages() {
    let results = vec![result(10, 40), result(20, 40)];
    let summary = summarize_results(&results).expect("two results");
    assert_eq!(summary.average_score, 15.0);
    assert_eq!(summary.average_percentage, 37.5);
    assert_eq!(summarize_results(&[]), None);
}
