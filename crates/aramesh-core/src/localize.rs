//! Localization seam.
//!
//! Translation lookup and calendar display are external collaborators; the
//! composers only ever see this trait. Threading a `&dyn Localizer` through
//! every call keeps the renderers free of global state.

use jiff::civil::Date;

/// String and date localization as seen by the report composers.
pub trait Localizer {
    /// Look up a translated UI string by key.
    fn translate(&self, key: &str) -> String;

    /// Format a Gregorian date for display (e.g. converted to the local
    /// calendar by the hosting application).
    fn display_date(&self, date: Date) -> String;
}

/// Pass-through localizer: returns the key itself and ISO dates.
///
/// Mirrors the lookup fallback of the hosting application's translation
/// table (unknown key → key). Used headless and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyLocalizer;

impl Localizer for KeyLocalizer {
    fn translate(&self, key: &str) -> String {
        key.to_string()
    }

    fn display_date(&self, date: Date) -> String {
        date.to_string()
    }
}
