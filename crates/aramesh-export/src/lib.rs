//! aramesh-export
//!
//! Report composition and document generation. A [`report::ReportDocument`]
//! is composed once from a [`ReportSpec`] and rendered by one of two
//! back-ends: a flow document (DOCX, page-oriented) or a grid document
//! (XLSX, right-to-left sheets). Export is atomic — a failed render or
//! write never leaves a partial file behind.

pub mod docx;
pub mod error;
pub mod report;
pub mod styles;
pub mod xlsx;

use std::fs;
use std::path::Path;

use aramesh_core::localize::Localizer;
use aramesh_core::models::report::ReportSpec;

use crate::error::ExportError;
use crate::report::ReportDocument;
use crate::styles::DocumentStyles;

/// The two rendering back-ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Renderer {
    /// Page-oriented flow document (DOCX). No native bidi layout: the
    /// composer shapes data cells and truncates long notes for it.
    Flow,
    /// Sheet-oriented grid document (XLSX). Lays out bidi text natively;
    /// receives cells unshaped and untruncated.
    Grid,
}

impl Renderer {
    /// Whether the back-end performs its own bidi layout.
    pub fn native_bidi(self) -> bool {
        matches!(self, Renderer::Grid)
    }

    /// Whether free-text fields are truncated to protect page layout.
    pub fn truncates_long_text(self) -> bool {
        matches!(self, Renderer::Flow)
    }

    /// Pick a back-end from the destination file extension.
    pub fn from_path(path: &Path) -> Result<Self, ExportError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("docx") => Ok(Renderer::Flow),
            Some("xlsx") => Ok(Renderer::Grid),
            _ => Err(ExportError::UnsupportedRenderer(
                path.display().to_string(),
            )),
        }
    }
}

/// Render a composed document to bytes with the given back-end.
pub fn render(
    document: &ReportDocument,
    renderer: Renderer,
    styles: &DocumentStyles,
) -> Result<Vec<u8>, ExportError> {
    match renderer {
        Renderer::Flow => docx::generate_docx(document, styles),
        Renderer::Grid => xlsx::generate_xlsx(document, styles),
    }
}

/// Compose, render, and write a report in one call. The back-end is chosen
/// from the destination extension; the file appears only after the whole
/// document rendered successfully.
pub fn export_report(
    spec: &ReportSpec,
    loc: &dyn Localizer,
    styles: &DocumentStyles,
    path: &Path,
) -> Result<(), ExportError> {
    let renderer = Renderer::from_path(path)?;
    let document = report::compose(spec, loc, renderer);
    let bytes = render(&document, renderer, styles)?;

    write_atomic(path, &bytes)?;
    tracing::info!(path = %path.display(), ?renderer, "report exported");
    Ok(())
}

/// Write via a temp file and rename, so an interrupted write cannot leave a
/// half-written report at the destination.
fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let tmp = path.with_extension("tmp");
    if let Err(e) = fs::write(&tmp, bytes).and_then(|()| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    Ok(())
}
