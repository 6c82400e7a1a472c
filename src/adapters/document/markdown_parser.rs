//! Regex-based markdown document parser adapter.
//!
//! Reads generated proposals line by line into the blocks the Word exporter
//! renders, and flags lines that use markdown the exporter would flatten.

use regex::Regex;

use crate::domain::document::{MarkdownBlock, StructureIssue, UnsupportedConstruct};
use crate::ports::DocumentParser;

/// Bold lead-ins the generator itself emits; allowed on export.
const ALLOWED_LEAD_INS: [&str; 2] = ["**Planned sites:**", "**Proposed duration:**"];

/// Regex-based implementation of DocumentParser.
#[derive(Debug, Clone)]
pub struct MarkdownDocumentParser {
    heading_regex: Regex,
    bullet_marker_regex: Regex,
    table_row_regex: Regex,
    blockquote_regex: Regex,
    code_fence_regex: Regex,
    numbered_item_regex: Regex,
    nested_item_regex: Regex,
    link_regex: Regex,
    emphasis_regex: Regex,
}

impl Default for MarkdownDocumentParser {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownDocumentParser {
    /// Creates a new markdown document parser with precompiled regexes.
    pub fn new() -> Self {
        Self {
            // "# Title" through "###### Minor"
            heading_regex: Regex::new(r"^(#{1,6})\s+(.*)$").unwrap(),
            bullet_marker_regex: Regex::new(r"^-\s+").unwrap(),
            // "| a | b |" and "|---|---|"
            table_row_regex: Regex::new(r"^\s*\|.*\|\s*$").unwrap(),
            blockquote_regex: Regex::new(r"^\s*>").unwrap(),
            code_fence_regex: Regex::new(r"^\s*(```|~~~)").unwrap(),
            // "1. item" or "2) item"
            numbered_item_regex: Regex::new(r"^\s*\d+[.)]\s+").unwrap(),
            // "  - item", "\t* item"
            nested_item_regex: Regex::new(r"^\s+[-*+]\s+").unwrap(),
            // "[text](url)" and "![alt](src)"
            link_regex: Regex::new(r"!?\[[^\]]*\]\([^)]*\)").unwrap(),
            // "**bold**", "__bold__", "*italic*"
            emphasis_regex: Regex::new(r"\*\*[^*]+\*\*|__[^_]+__|\*[^*\s][^*]*\*").unwrap(),
        }
    }

    /// Classifies a single line (without its line terminator).
    fn parse_line(&self, line: &str) -> MarkdownBlock {
        if line.trim().is_empty() {
            return MarkdownBlock::Blank;
        }

        if let Some(caps) = self.heading_regex.captures(line) {
            let level = caps.get(1).map_or(1, |m| m.as_str().len()) as u8;
            let text = caps.get(2).map_or("", |m| m.as_str()).to_string();
            return MarkdownBlock::Heading { level, text };
        }

        if line.starts_with("- ") {
            let text = self.bullet_marker_regex.replace(line, "").into_owned();
            return MarkdownBlock::Bullet { text };
        }

        MarkdownBlock::Text {
            text: line.to_string(),
        }
    }

    /// Constructs on `line` that the exporter does not reproduce, in check order.
    fn unsupported_constructs(&self, line: &str) -> Vec<UnsupportedConstruct> {
        let mut found = Vec::new();

        if self.code_fence_regex.is_match(line) {
            found.push(UnsupportedConstruct::CodeFence);
        }
        if self.table_row_regex.is_match(line) {
            found.push(UnsupportedConstruct::Table);
        }
        if self.blockquote_regex.is_match(line) {
            found.push(UnsupportedConstruct::BlockQuote);
        }
        if self.numbered_item_regex.is_match(line) {
            found.push(UnsupportedConstruct::NumberedList);
        }
        if self.nested_item_regex.is_match(line) {
            found.push(UnsupportedConstruct::NestedList);
        }
        if self.link_regex.is_match(line) {
            found.push(UnsupportedConstruct::Link);
        }

        let without_lead_ins = ALLOWED_LEAD_INS
            .iter()
            .fold(line.to_string(), |acc, lead| acc.replacen(lead, "", 1));
        if self.emphasis_regex.is_match(&without_lead_ins) {
            found.push(UnsupportedConstruct::Emphasis);
        }

        found
    }
}

/// Splits on `\n`, dropping a trailing `\r` from each line.
fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

impl DocumentParser for MarkdownDocumentParser {
    fn parse(&self, content: &str) -> Vec<MarkdownBlock> {
        split_lines(content).map(|line| self.parse_line(line)).collect()
    }

    fn validate_structure(&self, content: &str) -> Vec<StructureIssue> {
        split_lines(content)
            .enumerate()
            .flat_map(|(index, line)| {
                self.unsupported_constructs(line)
                    .into_iter()
                    .map(move |construct| StructureIssue {
                        line: index + 1,
                        construct,
                        content: line.to_string(),
                    })
            })
            .collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
