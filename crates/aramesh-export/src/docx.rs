//! Flow-document (DOCX) back-end: page-oriented, fixed margins.
//!
//! Builds the whole document in memory; nothing touches the filesystem here.
//! This renderer has no native bidi layout, so every data cell it receives
//! has already been shaped into visual order by the composer.

use std::io::Cursor;

use docx_rs::{
    AlignmentType, BreakType, Docx, PageMargin, Paragraph, Run, RunFonts, ShdType, Shading, Table,
    TableCell, TableRow, WidthType,
};

use crate::error::ExportError;
use crate::report::{Block, Cell, PairRow, ReportDocument};
use crate::styles::DocumentStyles;

const TWIPS_PER_INCH: f64 = 1440.0;

/// Table grid in twips: value column wide, label column narrow (pair blocks).
const PAIR_GRID: [usize; 2] = [5700, 3300];

/// Generate DOCX bytes for a composed report document.
pub fn generate_docx(document: &ReportDocument, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let margin = (styles.margin_inches * TWIPS_PER_INCH) as i32;
    let mut docx = Docx::new().page_margin(
        PageMargin::new()
            .top(margin)
            .bottom(margin)
            .left(margin)
            .right(margin),
    );

    for block in &document.blocks {
        match block {
            Block::Title(text) => {
                docx = docx
                    .add_paragraph(banner_paragraph(text, styles.title_size, styles))
                    .add_paragraph(Paragraph::new());
            }
            Block::Heading(text) => {
                docx = docx.add_paragraph(banner_paragraph(text, styles.heading_size, styles));
            }
            Block::InfoPairs(rows) => {
                docx = docx
                    .add_table(pairs_table(rows, &styles.label_fill, None, styles))
                    .add_paragraph(Paragraph::new());
            }
            Block::SummaryPairs(rows) => {
                docx = docx
                    .add_table(pairs_table(rows, &styles.summary_fill, Some("ffffff"), styles))
                    .add_paragraph(Paragraph::new());
            }
            Block::Table { headers, rows } => {
                docx = docx
                    .add_table(detail_table(headers, rows, styles))
                    .add_paragraph(Paragraph::new());
            }
            Block::SectionBreak => {
                docx = docx.add_paragraph(
                    Paragraph::new().add_run(Run::new().add_break(BreakType::Page)),
                );
            }
        }
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

fn run(text: &str, size_pt: usize, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(size_pt * 2) // OOXML uses half-points
        .fonts(RunFonts::new().ascii(&styles.font))
}

fn banner_paragraph(text: &str, size_pt: usize, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Center)
        .add_run(run(text, size_pt, styles).bold().color(&styles.title_color))
}

fn cell_paragraph(cell: &Cell, styles: &DocumentStyles) -> Paragraph {
    let mut r = run(&cell.text, styles.body_size, styles);
    if cell.numeric {
        r = r.bold().color(&styles.numeric_color);
    }
    Paragraph::new().align(AlignmentType::Right).add_run(r)
}

fn shaded_cell(paragraph: Paragraph, fill: Option<&str>) -> TableCell {
    let cell = TableCell::new().add_paragraph(paragraph);
    match fill {
        Some(fill) => cell.shading(Shading::new().shd_type(ShdType::Clear).fill(fill)),
        None => cell,
    }
}

/// Two-column value/label table, value column first (right-to-left order).
fn pairs_table(
    rows: &[PairRow],
    label_fill: &str,
    label_color: Option<&str>,
    styles: &DocumentStyles,
) -> Table {
    let rows: Vec<TableRow> = rows
        .iter()
        .map(|pair| {
            let mut label_run = run(&pair.label, styles.body_size, styles).bold();
            if let Some(color) = label_color {
                label_run = label_run.color(color);
            }
            let label_paragraph = Paragraph::new()
                .align(AlignmentType::Right)
                .add_run(label_run);

            TableRow::new(vec![
                shaded_cell(cell_paragraph(&pair.value, styles), None)
                    .width(PAIR_GRID[0], WidthType::Dxa),
                shaded_cell(label_paragraph, Some(label_fill)).width(PAIR_GRID[1], WidthType::Dxa),
            ])
        })
        .collect();

    Table::new(rows).set_grid(PAIR_GRID.to_vec())
}

fn detail_table(headers: &[String], rows: &[Vec<Cell>], styles: &DocumentStyles) -> Table {
    let header_row = TableRow::new(
        headers
            .iter()
            .map(|h| {
                let paragraph = Paragraph::new()
                    .align(AlignmentType::Center)
                    .add_run(run(h, styles.body_size + 1, styles).bold().color("ffffff"));
                shaded_cell(paragraph, Some(&styles.header_fill))
            })
            .collect(),
    );

    let mut table_rows = vec![header_row];
    for (index, row) in rows.iter().enumerate() {
        let stripe = (index % 2 == 1).then_some(styles.stripe_fill.as_str());
        table_rows.push(TableRow::new(
            row.iter()
                .map(|cell| shaded_cell(cell_paragraph(cell, styles), stripe))
                .collect(),
        ));
    }

    Table::new(table_rows)
}
