//! Document adapters - Implementations for proposal generation and export.
//!
//! This module provides adapters for the document-related ports:
//! - `TemplateProposalGenerator` - Renders proposal records to markdown
//! - `MarkdownDocumentParser` - Splits markdown into export blocks
//! - `PulldownExportService` - Converts markdown to HTML and Word
//! - `LocalExportFileStorage` - Writes exports to a local directory

mod local_file_storage;
mod markdown_parser;
mod proposal_template;
mod pulldown_export_service;
mod template_generator;

pub use local_file_storage::LocalExportFileStorage;
pub use markdown_parser::MarkdownDocumentParser;
pub use pulldown_export_service::{PulldownExportService, WORD_BULLET_PREFIX};
pub use template_generator::TemplateProposalGenerator;
