//! Line-level view of a generated document, as consumed by the exporter.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One line of the supported markdown subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MarkdownBlock {
    /// Whitespace-only line; a paragraph break.
    Blank,
    /// ATX heading, level 1 to 6.
    Heading { level: u8, text: String },
    /// `- ` list item with the marker removed.
    Bullet { text: String },
    /// Any other line, kept as a plain text run.
    Text { text: String },
}

/// Markdown construct the line-oriented exporter cannot render faithfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnsupportedConstruct {
    Table,
    BlockQuote,
    CodeFence,
    NumberedList,
    NestedList,
    Link,
    Emphasis,
}

impl UnsupportedConstruct {
    pub fn description(&self) -> &'static str {
        match self {
            UnsupportedConstruct::Table => "table row",
            UnsupportedConstruct::BlockQuote => "block quote",
            UnsupportedConstruct::CodeFence => "fenced code block",
            UnsupportedConstruct::NumberedList => "numbered list item",
            UnsupportedConstruct::NestedList => "nested list item",
            UnsupportedConstruct::Link => "link or image",
            UnsupportedConstruct::Emphasis => "emphasis run",
        }
    }
}

/// A line that falls outside the supported subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureIssue {
    /// 1-based line number.
    pub line: usize,
    pub construct: UnsupportedConstruct,
    pub content: String,
}

impl fmt::Display for StructureIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: {} not supported by export: {}",
            self.line,
            self.construct.description(),
            self.content
        )
    }
}
