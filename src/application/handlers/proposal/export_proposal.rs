//! ExportProposalHandler - Generates a proposal and converts it for download.
//!
//! Renders the record, converts the markdown to the requested format and,
//! when asked, writes the result through the export file storage.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::domain::proposal::ProposalRecord;
use crate::ports::{
    download_stem, DocumentExportService, DocumentGenerator, ExportError, ExportFileStorage,
    ExportFormat, ExportedDocument, GenerationOptions, StorageError, StoredExport,
    FALLBACK_FILE_STEM,
};

/// Command to export a proposal.
#[derive(Debug, Clone)]
pub struct ExportProposalCommand {
    /// The proposal to render.
    pub record: ProposalRecord,
    /// Tone, depth and context options.
    pub options: GenerationOptions,
    /// Target format.
    pub format: ExportFormat,
    /// Write the exported file to storage.
    pub store: bool,
}

impl ExportProposalCommand {
    /// Export and write to storage.
    pub fn to_file(record: ProposalRecord, options: GenerationOptions, format: ExportFormat) -> Self {
        Self {
            record,
            options,
            format,
            store: true,
        }
    }

    /// Export in memory only.
    pub fn in_memory(
        record: ProposalRecord,
        options: GenerationOptions,
        format: ExportFormat,
    ) -> Self {
        Self {
            record,
            options,
            format,
            store: false,
        }
    }
}

/// Result of a successful export.
#[derive(Debug, Clone)]
pub struct ExportProposalResult {
    /// The exported bytes with content type and filename.
    pub document: ExportedDocument,
    /// Where the file was written, when storage was requested.
    pub stored: Option<StoredExport>,
}

/// Error type for proposal export.
#[derive(Debug, Clone, Error)]
pub enum ExportProposalError {
    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Handler for exporting proposal documents.
///
/// # Dependencies
///
/// - `DocumentGenerator`: Render markdown content
/// - `DocumentExportService`: Convert markdown to the target format
/// - `ExportFileStorage`: Write the exported file
///
/// # Usage
///
/// ```rust,ignore
/// let handler = ExportProposalHandler::new(generator, exporter, storage);
/// let cmd = ExportProposalCommand::to_file(record, options, ExportFormat::Docx);
/// let result = handler.handle(cmd).await?;
/// ```
pub struct ExportProposalHandler {
    document_generator: Arc<dyn DocumentGenerator>,
    export_service: Arc<dyn DocumentExportService>,
    file_storage: Arc<dyn ExportFileStorage>,
    fallback_stem: String,
}

impl ExportProposalHandler {
    pub fn new(
        document_generator: Arc<dyn DocumentGenerator>,
        export_service: Arc<dyn DocumentExportService>,
        file_storage: Arc<dyn ExportFileStorage>,
    ) -> Self {
        Self {
            document_generator,
            export_service,
            file_storage,
            fallback_stem: FALLBACK_FILE_STEM.to_string(),
        }
    }

    /// Filename stem used when the proposal has no title.
    pub fn with_fallback_stem(mut self, stem: impl Into<String>) -> Self {
        self.fallback_stem = stem.into();
        self
    }

    pub async fn handle(
        &self,
        cmd: ExportProposalCommand,
    ) -> Result<ExportProposalResult, ExportProposalError> {
        // 1. Render markdown
        let markdown = self.document_generator.generate(&cmd.record, &cmd.options);

        // 2. Convert
        let stem = download_stem(&cmd.record.title, &self.fallback_stem);
        let document = self
            .export_service
            .export(&markdown, cmd.format, &stem)
            .await?;

        // 3. Store
        let stored = if cmd.store {
            Some(
                self.file_storage
                    .write(&document.filename, &document.content)
                    .await?,
            )
        } else {
            None
        };

        info!(
            format = %cmd.format,
            filename = %document.filename,
            size_bytes = document.size_bytes(),
            stored = stored.is_some(),
            "Proposal exported"
        );

        Ok(ExportProposalResult { document, stored })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
