use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("unsupported report renderer for '{0}'")]
    UnsupportedRenderer(String),

    #[error("document generation failed: {0}")]
    Docx(String),

    #[error("spreadsheet generation failed: {0}")]
    Xlsx(String),

    #[error("failed to write report file: {0}")]
    Io(#[from] std::io::Error),
}

impl From<rust_xlsxwriter::XlsxError> for ExportError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        ExportError::Xlsx(e.to_string())
    }
}
