use thiserror::Error;

use crate::models::stress::{STRESS_LEVEL_MAX, STRESS_LEVEL_MIN};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("stress level {0} outside {STRESS_LEVEL_MIN}..={STRESS_LEVEL_MAX}")]
    InvalidStressLevel(u8),
}
