//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `document` - Template generation, markdown parsing, export, file storage
//! - `input` - Loading proposal records from YAML / JSON files

pub mod document;
pub mod input;

pub use document::{
    LocalExportFileStorage, MarkdownDocumentParser, PulldownExportService,
    TemplateProposalGenerator,
};
pub use input::{load_proposal, parse_proposal, InputFormat, ProposalInputError};
