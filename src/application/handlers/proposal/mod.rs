//! Proposal handlers - generation and export.

mod export_proposal;
mod generate_proposal;

pub use export_proposal::{
    ExportProposalCommand, ExportProposalError, ExportProposalHandler, ExportProposalResult,
};
pub use generate_proposal::{
    GenerateProposalCommand, GenerateProposalHandler, GenerateProposalResult,
};
