//! Input adapters - Loading proposal records from files.

mod proposal_file;

pub use proposal_file::{load_proposal, parse_proposal, InputFormat, ProposalInputError};
