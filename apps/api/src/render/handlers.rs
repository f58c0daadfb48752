//! Axum route handlers for PDF downloads.

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::extract::{AppJson, AppPath};
use crate::models::DocumentKind;
use crate::render::{render_pdf_blocking, PDF_MEDIA_TYPE};

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub text: String,
}

/// POST /api/v1/documents/:kind/pdf
///
/// Renders already-cleaned text as a downloadable `resume.pdf` or
/// `cover_letter.pdf`. Nothing is stored; the same text always yields the
/// same file.
pub async fn handle_download_pdf(
    AppPath(kind): AppPath<DocumentKind>,
    AppJson(request): AppJson<RenderRequest>,
) -> Result<Response, AppError> {
    let pdf = render_pdf_blocking(request.text).await?;

    debug!("Rendered {} ({} bytes)", kind.file_name(), pdf.len());

    Ok((
        [
            (header::CONTENT_TYPE, PDF_MEDIA_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", kind.file_name()),
            ),
        ],
        Bytes::from(pdf),
    )
        .into_response())
}
