//! aramesh-instruments
//!
//! Questionnaire instrument definitions and the scoring pipeline. Pure data
//! and arithmetic — no storage dependency. Scoring rules are data: each test
//! carries a serialized policy that is parsed once into a typed [`rule::TestRule`]
//! and then drives scoring and interpretation.

pub mod error;
pub mod instruments;
pub mod interpret;
pub mod rule;
pub mod scoring;

use aramesh_core::models::test::{Question, TestDefinition};
use uuid::Uuid;

use crate::error::InstrumentError;

/// Trait implemented by each built-in questionnaire instrument.
pub trait Instrument: Send + Sync {
    /// Unique code for this instrument (e.g. "PSS10").
    fn code(&self) -> &str;

    /// Human-readable name (e.g. "Perceived Stress Scale (PSS-10)").
    fn name(&self) -> &str;

    /// A fresh test definition, including the serialized scoring rule.
    fn definition(&self) -> TestDefinition;

    /// The ordered questions for a definition with the given id.
    fn questions(&self, test_id: Uuid) -> Vec<Question>;
}

/// Return all built-in instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::pss10::Pss10),
        Box::new(instruments::pss5::Pss5),
    ]
}

/// Look up a built-in instrument by code.
pub fn get_instrument(code: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    all_instruments()
        .into_iter()
        .find(|i| i.code() == code)
        .ok_or_else(|| InstrumentError::UnknownInstrument(code.to_string()))
}
