//! aramesh-core
//!
//! Pure domain types for the Aramesh stress-tracking suite.
//! No I/O and no storage dependency — this is the shared vocabulary of the
//! system: test definitions, answers, results, stress logs, and the report
//! input bundle, plus the localization seam the composers render through.

pub mod error;
pub mod localize;
pub mod models;
