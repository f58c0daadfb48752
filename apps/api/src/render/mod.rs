// Document rendering: cleaned text → paginated PDF bytes.
// Layout (wrapping, page breaks) lives in `crate::layout`; this module owns
// the text encoding and the PDF object graph.

pub mod encoding;
pub mod handlers;
pub mod pdf;

use thiserror::Error;

pub use pdf::render_pdf;

/// Media type of every rendered document.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("character {character:?} at line {line}, column {column} cannot be encoded for PDF output")]
    UnsupportedCharacter {
        character: char,
        line: usize,
        column: usize,
    },

    #[error("PDF serialization failed: {0}")]
    Pdf(String),

    #[error("render worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// Runs [`render_pdf`] on the blocking thread pool.
pub async fn render_pdf_blocking(text: String) -> Result<Vec<u8>, RenderError> {
    tokio::task::spawn_blocking(move || render_pdf(&text)).await?
}
