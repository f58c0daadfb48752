//! Document generation: orchestrates the per-submission pipeline.
//!
//! Flow, for the resume and then the cover letter:
//!   build prompt → await completion → sanitize → render PDF.
//!
//! A failed completion never aborts the submission: it is logged with the
//! raw payload and the kind's placeholder text goes through sanitize and
//! render in its place. Rendering runs on the blocking pool; its failures
//! are returned to the caller.

use tracing::{debug, error, info};

use crate::generation::prompts::{build_cover_letter_prompt, build_resume_prompt};
use crate::generation::sanitizer::sanitize;
use crate::llm_client::CompletionClient;
use crate::models::{DocumentKind, GeneratedDocument};
use crate::profile::ApplicantProfile;
use crate::render::{render_pdf_blocking, RenderError};

/// Characters of cleaned output echoed to the debug log.
const PREVIEW_CHARS: usize = 300;

/// Generates every document kind, sequentially, in `DocumentKind::ALL` order.
pub async fn generate_documents(
    client: &dyn CompletionClient,
    profile: &ApplicantProfile,
) -> Result<Vec<GeneratedDocument>, RenderError> {
    info!(
        "Generating documents for {} ({} skills listed)",
        profile.job_title(),
        profile.skills_list().len()
    );

    let mut documents = Vec::with_capacity(DocumentKind::ALL.len());
    for kind in DocumentKind::ALL {
        documents.push(generate_document(client, profile, kind).await?);
    }
    Ok(documents)
}

/// Runs the pipeline for a single document kind.
pub async fn generate_document(
    client: &dyn CompletionClient,
    profile: &ApplicantProfile,
    kind: DocumentKind,
) -> Result<GeneratedDocument, RenderError> {
    let prompt = match kind {
        DocumentKind::Resume => build_resume_prompt(profile),
        DocumentKind::CoverLetter => build_cover_letter_prompt(profile),
    };

    let (raw_text, generation_failed) = match client.complete(&prompt).await {
        Ok(text) => (text, false),
        Err(e) => {
            error!(
                "Error in {} generation: {e}. Full API response: {}",
                kind.label(),
                e.raw_payload()
            );
            (kind.failure_placeholder().to_string(), true)
        }
    };

    let cleaned_text = sanitize(&raw_text);
    debug!(
        "{} content: {}",
        kind.label(),
        cleaned_text.chars().take(PREVIEW_CHARS).collect::<String>()
    );

    let pdf_bytes = render_pdf_blocking(cleaned_text.clone()).await?;

    Ok(GeneratedDocument {
        kind,
        raw_text,
        cleaned_text,
        pdf_bytes,
        generation_failed,
    })
}
