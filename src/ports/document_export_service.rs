//! Document Export Service Port - Format conversion interface.
//!
//! This port defines the contract for converting the generated proposal
//! markdown into downloadable formats (Word, HTML). Handlers depend on this
//! trait, while adapters (like PulldownExportService) provide the implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stem used for download filenames when the proposal has no title.
pub const FALLBACK_FILE_STEM: &str = "DBT_Proposal_Draft";

/// Port for exporting markdown documents to other formats.
///
/// # Contract
///
/// Implementations must:
/// - Accept the generator's markdown subset (headings, `- ` bullets, plain lines)
/// - Map each markdown line to one output paragraph for Word
/// - Report clear errors for conversion failures
///
/// # Usage
///
/// ```rust,ignore
/// let export_service: &dyn DocumentExportService = get_service();
///
/// // Convert to Word
/// let docx_bytes = export_service.to_docx("# My Proposal\n\nContent here").await?;
///
/// // Convert to HTML
/// let html = export_service.to_html("# My Proposal\n\nContent here").await?;
/// ```
#[async_trait]
pub trait DocumentExportService: Send + Sync {
    /// Convert markdown content to a `.docx` package.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if the Word package cannot be built.
    async fn to_docx(&self, markdown: &str) -> Result<Vec<u8>, ExportError>;

    /// Convert markdown content to a complete HTML page.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if conversion fails.
    async fn to_html(&self, markdown: &str) -> Result<String, ExportError>;

    /// Convert markdown to `format`, wrapped with content type and filename.
    ///
    /// `base_filename` is the download name without extension
    /// (see [`download_stem`]).
    async fn export(
        &self,
        markdown: &str,
        format: ExportFormat,
        base_filename: &str,
    ) -> Result<ExportedDocument, ExportError> {
        match format {
            ExportFormat::Markdown => Ok(ExportedDocument::from_markdown(
                markdown.to_string(),
                base_filename,
            )),
            ExportFormat::Docx => {
                let bytes = self.to_docx(markdown).await?;
                Ok(ExportedDocument::from_docx(bytes, base_filename))
            }
            ExportFormat::Html => {
                let html = self.to_html(markdown).await?;
                Ok(ExportedDocument::from_html(html, base_filename))
            }
        }
    }
}

/// Export formats supported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Raw markdown (no conversion needed).
    Markdown,
    /// Word document.
    Docx,
    /// Standalone HTML page.
    Html,
}

impl ExportFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            ExportFormat::Html => "text/html; charset=utf-8",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Docx => "docx",
            ExportFormat::Html => "html",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Markdown => write!(f, "markdown"),
            ExportFormat::Docx => write!(f, "docx"),
            ExportFormat::Html => write!(f, "html"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "docx" | "word" => Ok(ExportFormat::Docx),
            "html" | "htm" => Ok(ExportFormat::Html),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Filename stem for a proposal title.
///
/// Each whitespace run becomes a single `_`; a title with no visible
/// characters falls back to `fallback` (normally [`FALLBACK_FILE_STEM`]).
pub fn download_stem(title: &str, fallback: &str) -> String {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return fallback.to_string();
    }
    trimmed.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Exported document with content and metadata.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    /// The exported content as bytes.
    pub content: Vec<u8>,
    /// The MIME content type.
    pub content_type: String,
    /// Suggested filename for download.
    pub filename: String,
    /// The format that was used.
    pub format: ExportFormat,
}

impl ExportedDocument {
    /// Create a new exported document.
    pub fn new(content: Vec<u8>, format: ExportFormat, base_filename: &str) -> Self {
        Self {
            content,
            content_type: format.content_type().to_string(),
            filename: format!("{}.{}", base_filename, format.extension()),
            format,
        }
    }

    /// Create from markdown content (no conversion needed).
    pub fn from_markdown(markdown: String, base_filename: &str) -> Self {
        Self::new(markdown.into_bytes(), ExportFormat::Markdown, base_filename)
    }

    /// Create from HTML content.
    pub fn from_html(html: String, base_filename: &str) -> Self {
        Self::new(html.into_bytes(), ExportFormat::Html, base_filename)
    }

    /// Create from Word package bytes.
    pub fn from_docx(docx_bytes: Vec<u8>, base_filename: &str) -> Self {
        Self::new(docx_bytes, ExportFormat::Docx, base_filename)
    }

    /// Size of the content in bytes.
    pub fn size_bytes(&self) -> usize {
        self.content.len()
    }
}

/// Errors that can occur during document export.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    /// Unsupported export format requested.
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// Building the Word package failed.
    #[error("DOCX packaging failed: {0}")]
    DocxPackagingFailed(String),
}

impl ExportError {
    /// Create a Word packaging error.
    pub fn docx_failed(reason: impl Into<String>) -> Self {
        Self::DocxPackagingFailed(reason.into())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
