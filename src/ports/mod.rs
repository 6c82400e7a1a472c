//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Document Ports
//!
//! - `DocumentGenerator` - Renders a proposal record to markdown
//! - `DocumentParser` - Splits markdown into export blocks, validates the subset
//! - `DocumentExportService` - Converts markdown to Word and HTML
//! - `ExportFileStorage` - Writes exported files to disk

mod document_export_service;
mod document_generator;
mod document_parser;
mod export_file_storage;

pub use document_export_service::{
    download_stem, DocumentExportService, ExportError, ExportFormat,
    ExportedDocument, FALLBACK_FILE_STEM,
};
pub use document_generator::{Depth, DocumentGenerator, GenerationOptions, SectionKind, Tone};
pub use document_parser::DocumentParser;
pub use export_file_storage::{ExportFileStorage, StorageError, StoredExport};
