//! Grid (XLSX) back-end: sheet-oriented, right-to-left sheet direction.
//!
//! The spreadsheet engine lays out bidi text natively, so cells arrive from
//! the composer unshaped and long notes untruncated. A section break starts
//! a new worksheet.

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet};

use crate::error::ExportError;
use crate::report::{Block, Cell, PairRow, ReportDocument};
use crate::styles::DocumentStyles;

const COLUMN_WIDTHS: [f64; 6] = [28.0, 18.0, 15.0, 12.0, 15.0, 15.0];

/// Generate XLSX bytes for a composed report document.
pub fn generate_xlsx(
    document: &ReportDocument,
    styles: &DocumentStyles,
) -> Result<Vec<u8>, ExportError> {
    let formats = Formats::new(styles);

    let mut workbook = Workbook::new();
    for section in sections(&document.blocks) {
        let worksheet = workbook.add_worksheet();
        worksheet.set_right_to_left(true);
        write_section(worksheet, section, &formats)?;
    }

    Ok(workbook.save_to_buffer()?)
}

/// Split the block list into per-worksheet sections.
fn sections(blocks: &[Block]) -> Vec<&[Block]> {
    let mut out: Vec<&[Block]> = blocks
        .split(|b| matches!(b, Block::SectionBreak))
        .collect();
    if out.is_empty() {
        out.push(&[]);
    }
    out
}

fn write_section(
    worksheet: &mut Worksheet,
    blocks: &[Block],
    formats: &Formats,
) -> Result<(), ExportError> {
    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }

    let mut row: u32 = 0;
    for block in blocks {
        match block {
            Block::Title(text) => {
                worksheet.merge_range(row, 0, row, 4, text, &formats.title)?;
                row += 2;
            }
            Block::Heading(text) => {
                worksheet.merge_range(row, 0, row, 4, text, &formats.heading)?;
                row += 1;
            }
            Block::InfoPairs(rows) => {
                row = write_pairs(worksheet, rows, row, &formats.label, formats)?;
            }
            Block::SummaryPairs(rows) => {
                row = write_pairs(worksheet, rows, row, &formats.summary_label, formats)?;
            }
            Block::Table { headers, rows } => {
                for (col, header) in headers.iter().enumerate() {
                    worksheet.write_string_with_format(row, col as u16, header, &formats.header)?;
                }
                row += 1;

                for (index, cells) in rows.iter().enumerate() {
                    let stripe = index % 2 == 1;
                    for (col, cell) in cells.iter().enumerate() {
                        worksheet.write_string_with_format(
                            row,
                            col as u16,
                            &cell.text,
                            formats.for_cell(cell, stripe),
                        )?;
                    }
                    row += 1;
                }
            }
            // Sections were split on breaks already.
            Block::SectionBreak => {}
        }
    }

    Ok(())
}

fn write_pairs(
    worksheet: &mut Worksheet,
    rows: &[PairRow],
    mut row: u32,
    label_format: &Format,
    formats: &Formats,
) -> Result<u32, ExportError> {
    for pair in rows {
        worksheet.write_string_with_format(
            row,
            0,
            &pair.value.text,
            formats.for_cell(&pair.value, false),
        )?;
        worksheet.write_string_with_format(row, 1, &pair.label, label_format)?;
        row += 1;
    }
    Ok(row + 1)
}

struct Formats {
    title: Format,
    heading: Format,
    header: Format,
    label: Format,
    summary_label: Format,
    text: Format,
    numeric: Format,
    text_stripe: Format,
    numeric_stripe: Format,
}

impl Formats {
    fn new(styles: &DocumentStyles) -> Self {
        let bordered = |format: Format| {
            format
                .set_border(FormatBorder::Thin)
                .set_border_color(Color::RGB(0xCCCCCC))
        };
        let base = |size: usize| {
            Format::new()
                .set_font_name(&styles.font)
                .set_font_size(size as f64)
                .set_align(FormatAlign::VerticalCenter)
        };

        let text = bordered(base(styles.body_size).set_align(FormatAlign::Right));
        let numeric = bordered(
            base(styles.body_size)
                .set_align(FormatAlign::Right)
                .set_bold()
                .set_font_color(rgb(&styles.numeric_color)),
        );

        Self {
            title: base(styles.title_size)
                .set_bold()
                .set_font_color(Color::White)
                .set_background_color(rgb(&styles.title_color))
                .set_align(FormatAlign::Center),
            heading: base(styles.heading_size)
                .set_bold()
                .set_font_color(Color::White)
                .set_background_color(rgb(&styles.header_fill))
                .set_align(FormatAlign::Center),
            header: bordered(
                base(styles.body_size + 1)
                    .set_bold()
                    .set_font_color(Color::White)
                    .set_background_color(rgb(&styles.header_fill))
                    .set_align(FormatAlign::Center),
            ),
            label: bordered(
                base(styles.body_size)
                    .set_bold()
                    .set_background_color(rgb(&styles.label_fill))
                    .set_align(FormatAlign::Right),
            ),
            summary_label: bordered(
                base(styles.body_size)
                    .set_bold()
                    .set_font_color(Color::White)
                    .set_background_color(rgb(&styles.summary_fill))
                    .set_align(FormatAlign::Right),
            ),
            text_stripe: text.clone().set_background_color(rgb(&styles.stripe_fill)),
            numeric_stripe: numeric.clone().set_background_color(rgb(&styles.stripe_fill)),
            text,
            numeric,
        }
    }

    fn for_cell(&self, cell: &Cell, stripe: bool) -> &Format {
        match (cell.numeric, stripe) {
            (true, true) => &self.numeric_stripe,
            (true, false) => &self.numeric,
            (false, true) => &self.text_stripe,
            (false, false) => &self.text,
        }
    }
}

fn rgb(hex: &str) -> Color {
    u32::from_str_radix(hex.trim_start_matches('#'), 16)
        .map(Color::RGB)
        .unwrap_or(Color::Black)
}
