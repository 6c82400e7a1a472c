//! Document Parser Port - Markdown parsing interface.
//!
//! This port defines the contract for reading generated markdown back into
//! line-level blocks for export, and for checking that a document stays inside
//! the markdown subset the exporter understands.

use crate::domain::document::{MarkdownBlock, StructureIssue};

/// Port for parsing markdown documents into export blocks.
///
/// # Contract
///
/// Implementations must:
/// - Split on `\n` or `\r\n` and produce exactly one block per line
/// - Classify lines as blank, heading (`#` to `######`), bullet (`- `) or text
/// - Report, by 1-based line number, constructs the exporter cannot reproduce
///
/// # Usage
///
/// ```rust,ignore
/// let parser: &dyn DocumentParser = get_parser();
///
/// for block in parser.parse(&markdown) {
///     render(block);
/// }
///
/// let issues = parser.validate_structure(&user_supplied_milestones);
/// ```
pub trait DocumentParser: Send + Sync {
    /// Parse a document into blocks, one per line.
    fn parse(&self, content: &str) -> Vec<MarkdownBlock>;

    /// Validate document structure without converting it.
    ///
    /// Empty list means every line is inside the supported subset.
    fn validate_structure(&self, content: &str) -> Vec<StructureIssue>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_parser_is_object_safe() {
        fn check<T: DocumentParser + ?Sized>() {}
        check::<dyn DocumentParser>();
    }
}
