//! Document module - Generated markdown and its exporter-facing structure.

mod blocks;
mod value_objects;

pub use blocks::{MarkdownBlock, StructureIssue, UnsupportedConstruct};
pub use value_objects::MarkdownContent;
