//! The report composer: aggregated records → renderer-independent document.
//!
//! A composed document is a flat list of blocks in fixed order: title, user
//! info pairs, then per record kind a summary block, a heading, and a detail
//! table. Tables are laid out in right-to-left visual order (rightmost
//! column first), and pair rows put the value column before the label
//! column. Record ordering is whatever the caller supplied — the composer
//! never re-sorts.

use aramesh_core::localize::Localizer;
use aramesh_core::models::report::ReportSpec;
use aramesh_trends::{summarize_logs, summarize_results};

use crate::Renderer;

/// Character budget for free-text notes in flow documents; longer notes are
/// cut to 47 characters plus an ellipsis marker.
pub const NOTES_MAX_CHARS: usize = 50;

/// One table cell. Numeric cells get distinct styling from text cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub text: String,
    pub numeric: bool,
}

impl Cell {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            numeric: false,
        }
    }

    fn numeric(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            numeric: true,
        }
    }
}

/// One value/label row of an info or summary block, in right-to-left visual
/// order: value column first, label column second.
#[derive(Debug, Clone, PartialEq)]
pub struct PairRow {
    pub value: Cell,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Title(String),
    Heading(String),
    InfoPairs(Vec<PairRow>),
    SummaryPairs(Vec<PairRow>),
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<Cell>>,
    },
    /// New page in a flow document, new sheet in a grid document.
    SectionBreak,
}

/// A composed, renderer-independent report document.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pub blocks: Vec<Block>,
}

/// Compose a report document from an export request.
///
/// Data cells are passed through the RTL shaper when the target renderer
/// lacks native bidi layout; column headers always take the shaping-skip
/// path. An empty spec still composes a valid document of just the title
/// and info blocks.
pub fn compose(spec: &ReportSpec, loc: &dyn Localizer, renderer: Renderer) -> ReportDocument {
    let shape = |text: &str| aramesh_text::shape(text, !renderer.native_bidi());
    let header = |key: &str| aramesh_text::shape(&loc.translate(key), false);

    let mut blocks = Vec::new();
    blocks.push(Block::Title(shape(&loc.translate("reports"))));

    let record_count = spec.stress_logs.len() + spec.anxiety_results.len();
    blocks.push(Block::InfoPairs(vec![
        PairRow {
            value: Cell::text(shape(&spec.user.username)),
            label: shape(&loc.translate("username")),
        },
        PairRow {
            value: Cell::text(shape(&loc.display_date(spec.start_date))),
            label: shape(&loc.translate("reports_date_from")),
        },
        PairRow {
            value: Cell::text(shape(&loc.display_date(spec.end_date))),
            label: shape(&loc.translate("reports_date_to")),
        },
        PairRow {
            value: Cell::numeric(record_count.to_string()),
            label: shape(&loc.translate("record_count")),
        },
    ]));

    if let Some(summary) = summarize_logs(&spec.stress_logs) {
        blocks.push(Block::SummaryPairs(vec![
            PairRow {
                value: Cell::numeric(format!("{:.2}/10", summary.average_stress)),
                label: shape(&loc.translate("average_stress")),
            },
            PairRow {
                value: Cell::numeric(format!("{:.2}", summary.average_sleep_hours)),
                label: shape(&loc.translate("average_sleep")),
            },
            PairRow {
                value: Cell::numeric(format!(
                    "{:.2} {}",
                    summary.average_activity_minutes,
                    loc.translate("minutes")
                )),
                label: shape(&loc.translate("average_activity")),
            },
        ]));

        blocks.push(Block::Heading(shape(&loc.translate("stress_history"))));
        blocks.push(Block::Table {
            headers: vec![
                header("notes"),
                header("physical_activity"),
                header("sleep_hours"),
                header("stress_level"),
                header("date"),
            ],
            rows: spec
                .stress_logs
                .iter()
                .map(|log| {
                    let notes = log.notes.as_deref().unwrap_or("-");
                    let notes = if renderer.truncates_long_text() {
                        truncate_notes(notes)
                    } else {
                        notes.to_string()
                    };
                    vec![
                        Cell::text(shape(&notes)),
                        Cell::numeric(
                            log.physical_activity_minutes
                                .map_or_else(|| "-".to_string(), |m| m.to_string()),
                        ),
                        Cell::numeric(
                            log.sleep_hours
                                .map_or_else(|| "-".to_string(), |h| h.to_string()),
                        ),
                        Cell::numeric(log.stress_level.to_string()),
                        Cell::text(shape(&loc.display_date(log.date))),
                    ]
                })
                .collect(),
        });
    }

    if let Some(summary) = summarize_results(&spec.anxiety_results) {
        if !spec.stress_logs.is_empty() {
            blocks.push(Block::SectionBreak);
        }

        blocks.push(Block::SummaryPairs(vec![
            PairRow {
                value: Cell::numeric(summary.count.to_string()),
                label: shape(&loc.translate("results_count")),
            },
            PairRow {
                value: Cell::numeric(format!("{:.2}", summary.average_score)),
                label: shape(&loc.translate("average_score")),
            },
            PairRow {
                value: Cell::numeric(format!("{:.2}%", summary.average_percentage)),
                label: shape(&loc.translate("average_percentage")),
            },
        ]));

        blocks.push(Block::Heading(shape(&loc.translate("anxiety_history"))));
        blocks.push(Block::Table {
            headers: vec![
                header("interpretation"),
                header("percentage"),
                header("max_score"),
                header("anxiety_score"),
                header("test_name"),
                header("date"),
            ],
            rows: spec
                .anxiety_results
                .iter()
                .map(|result| {
                    vec![
                        Cell::text(shape(&result.interpretation)),
                        Cell::numeric(format!("{}%", result.percentage)),
                        Cell::numeric(result.max_score.to_string()),
                        Cell::numeric(result.score.to_string()),
                        Cell::text(shape(&result.test_name)),
                        Cell::text(shape(&loc.display_date(result.date_taken))),
                    ]
                })
                .collect(),
        });
    }

    ReportDocument { blocks }
}

fn truncate_notes(notes: &str) -> String {
    if notes.chars().count() > NOTES_MAX_CHARS {
        let cut: String = notes.chars().take(NOTES_MAX_CHARS - 3).collect();
        format!("{cut}...")
    } else {
        notes.to_string()
    }
}
