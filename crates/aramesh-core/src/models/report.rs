use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::result::TestResult;
use super::stress::StressLogEntry;

/// The slice of user identity a report needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportUser {
    pub id: Uuid,
    pub username: String,
}

/// Input bundle for one report export: the user, the covered date range, and
/// the records to render. Constructed per export request; the composer never
/// re-sorts the record lists — ordering is the caller's.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSpec {
    pub user: ReportUser,
    pub start_date: jiff::civil::Date,
    pub end_date: jiff::civil::Date,
    pub stress_logs: Vec<StressLogEntry>,
    pub anxiety_results: Vec<TestResult>,
}
