//! aramesh-text
//!
//! Right-to-left text preparation for renderers without native bidi support.
//! Arabic/Persian text is stored in logical order with context-free letter
//! codepoints; a renderer that just draws codepoints left to right would
//! produce disconnected, mirrored output. [`shape`] fixes both: it composes
//! contextual presentation forms (including lam-alef ligatures) and reorders
//! the result into visual order.
//!
//! Shaping is a rendering nicety, never a hard failure path: any anomaly
//! returns the original text unchanged.

mod joining;
mod reorder;

/// Whether the text contains characters in the Arabic/Persian ranges
/// (U+0600–U+06FF, U+0750–U+077F).
pub fn contains_rtl(text: &str) -> bool {
    text.chars()
        .any(|c| matches!(c, '\u{0600}'..='\u{06FF}' | '\u{0750}'..='\u{077F}'))
}

/// Prepare text for a rendering surface.
///
/// With `want_shaping` false (the renderer handles bidi natively) or with no
/// RTL-range characters present, the text is returned unchanged. Otherwise
/// contextual forms are composed and the text is reordered into visual
/// presentation order.
pub fn shape(text: &str, want_shaping: bool) -> String {
    if !want_shaping || !contains_rtl(text) {
        return text.to_string();
    }

    let reshaped = joining::reshape(text);
    match reorder::to_visual(&reshaped) {
        Some(visual) => visual,
        None => {
            tracing::warn!("bidi reordering produced no output, leaving text unshaped");
            text.to_string()
        }
    }
}
