//! Application handlers.
//!
//! Command handlers that orchestrate generation, scoring and export.

pub mod proposal;

pub use proposal::{
    ExportProposalCommand, ExportProposalError, ExportProposalHandler, ExportProposalResult,
    GenerateProposalCommand, GenerateProposalHandler, GenerateProposalResult,
};
