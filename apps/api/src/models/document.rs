use serde::{Deserialize, Serialize};

/// The two documents produced for every submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Resume,
    CoverLetter,
}

impl DocumentKind {
    /// Generation order.
    pub const ALL: [DocumentKind; 2] = [DocumentKind::Resume, DocumentKind::CoverLetter];

    pub fn file_name(self) -> &'static str {
        match self {
            DocumentKind::Resume => "resume.pdf",
            DocumentKind::CoverLetter => "cover_letter.pdf",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Resume => "resume",
            DocumentKind::CoverLetter => "cover letter",
        }
    }

    /// Shown instead of the document when the completion call fails.
    /// Must stay WinAnsi-encodable so it can still be rendered.
    pub fn failure_placeholder(self) -> &'static str {
        match self {
            DocumentKind::Resume => "Failed to generate resume. Check API key or quota.",
            DocumentKind::CoverLetter => "Failed to generate cover letter.",
        }
    }
}

/// One finished document. Lives for a single request.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    pub kind: DocumentKind,
    /// Model output, or the failure placeholder.
    pub raw_text: String,
    /// `sanitize(raw_text)`.
    pub cleaned_text: String,
    /// `render_pdf(cleaned_text)`.
    pub pdf_bytes: Vec<u8>,
    pub generation_failed: bool,
}
