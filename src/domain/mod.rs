//! Domain layer containing the proposal model and pure domain services.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (identifiers, percentage, validation errors)
//! - `proposal` - The structured proposal record
//! - `document` - Generated markdown and its line-level structure
//! - `checklist` - Submission readiness scoring

pub mod checklist;
pub mod document;
pub mod foundation;
pub mod proposal;
