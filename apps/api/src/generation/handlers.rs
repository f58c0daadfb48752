//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::generation::generator::generate_documents;
use crate::models::{DocumentKind, GeneratedDocument};
use crate::profile::{validate, ProfileForm};
use crate::render::PDF_MEDIA_TYPE;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct DocumentPayload {
    pub kind: DocumentKind,
    pub file_name: &'static str,
    pub media_type: &'static str,
    /// Cleaned text, for display.
    pub text: String,
    /// True when `text` is the failure placeholder.
    pub generation_failed: bool,
    pub pdf_base64: String,
}

impl From<GeneratedDocument> for DocumentPayload {
    fn from(doc: GeneratedDocument) -> Self {
        Self {
            kind: doc.kind,
            file_name: doc.kind.file_name(),
            media_type: PDF_MEDIA_TYPE,
            pdf_base64: BASE64_STANDARD.encode(&doc.pdf_bytes),
            text: doc.cleaned_text,
            generation_failed: doc.generation_failed,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateApplicationResponse {
    pub submission_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub documents: Vec<DocumentPayload>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/applications
///
/// Validates the form, then generates, cleans and renders the resume and
/// cover letter. A validation failure lists every violated rule and never
/// reaches the model.
pub async fn handle_generate_application(
    State(state): State<AppState>,
    AppJson(form): AppJson<ProfileForm>,
) -> Result<Json<GenerateApplicationResponse>, AppError> {
    let submission_id = Uuid::new_v4();

    let profile = validate(&form).map_err(|errors| {
        info!(
            "Submission {submission_id} rejected with {} validation errors",
            errors.len()
        );
        AppError::Validation(errors)
    })?;

    let documents = generate_documents(state.completion.as_ref(), &profile).await?;

    for doc in &documents {
        debug!(
            "Submission {submission_id}: {} {} raw chars -> {} cleaned chars, {} PDF bytes",
            doc.kind.label(),
            doc.raw_text.chars().count(),
            doc.cleaned_text.chars().count(),
            doc.pdf_bytes.len()
        );
    }
    let failed = documents.iter().filter(|d| d.generation_failed).count();
    if failed > 0 {
        warn!("Submission {submission_id}: {failed} document(s) fell back to placeholder text");
    }
    info!("Submission {submission_id}: generated {} documents", documents.len());

    Ok(Json(GenerateApplicationResponse {
        submission_id,
        generated_at: Utc::now(),
        documents: documents.into_iter().map(DocumentPayload::from).collect(),
    }))
}
