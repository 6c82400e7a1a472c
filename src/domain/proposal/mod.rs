//! Proposal module - The structured record a proposal document is built from.
//!
//! # Components
//!
//! - `ProposalRecord` - The full form state (identity, classification, narrative fields)
//! - `Objective`, `Governance` - Nested record parts
//! - `Site`, `SiteRole` - Hub-and-spoke network membership
//! - `RiskItem` - Risk / mitigation pairs

mod record;
mod risk;
mod site;

pub use record::{is_unset, Governance, Objective, ProposalRecord, DEFAULT_TITLE};
pub use risk::{RiskItem, DEFAULT_MITIGATION, RISK_ENTRY_SEPARATOR};
pub use site::{Site, SiteRole};
