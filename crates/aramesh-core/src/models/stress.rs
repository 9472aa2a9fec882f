use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const STRESS_LEVEL_MIN: u8 = 1;
pub const STRESS_LEVEL_MAX: u8 = 10;

/// One daily stress log entry. Consumed read-only by the aggregator and the
/// report composer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StressLogEntry {
    pub date: jiff::civil::Date,
    pub stress_level: u8,
    pub sleep_hours: Option<f64>,
    pub physical_activity_minutes: Option<u32>,
    pub notes: Option<String>,
}

impl StressLogEntry {
    /// Build an entry, rejecting stress levels outside 1–10.
    pub fn new(
        date: jiff::civil::Date,
        stress_level: u8,
        sleep_hours: Option<f64>,
        physical_activity_minutes: Option<u32>,
        notes: Option<String>,
    ) -> Result<Self, CoreError> {
        if !(STRESS_LEVEL_MIN..=STRESS_LEVEL_MAX).contains(&stress_level) {
            return Err(CoreError::InvalidStressLevel(stress_level));
        }
        Ok(Self {
            date,
            stress_level,
            sleep_hours,
            physical_activity_minutes,
            notes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn stress_level_bounds_enforced() {
        assert!(StressLogEntry::new(date(2026, 8, 1), 0, None, None, None).is_err());
        assert!(StressLogEntry::new(date(2026, 8, 1), 11, None, None, None).is_err());
        assert!(StressLogEntry::new(date(2026, 8, 1), 10, None, None, None).is_ok());
    }
}
