use serde::{Deserialize, Serialize};

/// Document styling configuration for report exports. Colors are hex RGB
/// without the leading `#`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    /// Font for all text (e.g. "Vazirmatn" for Persian output).
    pub font: String,

    /// Body text font size in points.
    pub body_size: usize,

    /// Title font size in points.
    pub title_size: usize,

    /// Section heading font size in points.
    pub heading_size: usize,

    /// Page margin in inches (applied uniformly; flow renderer only).
    pub margin_inches: f64,

    /// Title text color.
    pub title_color: String,

    /// Fill behind section headings and detail-table header rows.
    pub header_fill: String,

    /// Fill behind info-block labels.
    pub label_fill: String,

    /// Fill behind summary-block labels.
    pub summary_fill: String,

    /// Text color distinguishing numeric cells from text cells.
    pub numeric_color: String,

    /// Fill for every other data row.
    pub stripe_fill: String,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            font: "Vazirmatn".to_string(),
            body_size: 10,
            title_size: 18,
            heading_size: 14,
            margin_inches: 0.79,
            title_color: "2c3e50".to_string(),
            header_fill: "34495e".to_string(),
            label_fill: "ecf0f1".to_string(),
            summary_fill: "3498db".to_string(),
            numeric_color: "0d47a1".to_string(),
            stripe_fill: "f8f9fa".to_string(),
        }
    }
}
