//! Foundation module - Shared domain primitives.
//!
//! Contains the identifiers, value objects and error types shared by the
//! proposal model, the checklist and the document types.

mod errors;
mod ids;
mod percentage;

pub use errors::ValidationError;
pub use ids::ObjectiveId;
pub use percentage::Percentage;
