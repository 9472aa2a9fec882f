//! Bidi reordering into visual presentation order.

use unicode_bidi::{BidiInfo, Level};

/// Reorder logical-order text into left-to-right visual order with an RTL
/// base direction, paragraph by paragraph. Returns `None` when the algorithm
/// yields nothing to reorder for non-empty input, so the caller can fall
/// back to the original text.
pub(crate) fn to_visual(text: &str) -> Option<String> {
    if text.is_empty() {
        return Some(String::new());
    }

    let bidi = BidiInfo::new(text, Some(Level::rtl()));
    if bidi.paragraphs.is_empty() {
        return None;
    }

    let mut visual = String::with_capacity(text.len());
    for paragraph in &bidi.paragraphs {
        let line = paragraph.range.clone();
        visual.push_str(&bidi.reorder_line(paragraph, line));
    }
    Some(visual)
}
