//! Export service adapter for proposal documents.
//!
//! This adapter provides document export capabilities:
//! - HTML preview using pulldown-cmark (pure Rust)
//! - Word (`.docx`) packages built with docx-rs, one paragraph per markdown line
//!
//! # Architecture
//!
//! This adapter implements the `DocumentExportService` port. Handlers depend on
//! the port trait, while this concrete implementation provides the conversion.

use std::io::Cursor;

use async_trait::async_trait;
use docx_rs::{Docx, Paragraph, Run, Style, StyleType};
use pulldown_cmark::{html, Options, Parser};
use tracing::debug;

use crate::domain::document::MarkdownBlock;
use crate::ports::{DocumentExportService, DocumentParser, ExportError};

use super::MarkdownDocumentParser;

/// Prefix that replaces the `- ` marker of bullet lines in Word output.
pub const WORD_BULLET_PREFIX: &str = "\u{2022} ";

/// Word paragraph style for a level-1 heading.
const TITLE_STYLE: &str = "Title";

/// Title used for the HTML page when the document has no H1.
const UNTITLED: &str = "Proposal Draft";

/// Export service using pulldown-cmark for HTML and docx-rs for Word.
///
/// # Example
///
/// ```rust,ignore
/// let service = PulldownExportService::new();
///
/// let html = service.to_html("# Hello\n\nWorld").await?;
/// let docx = service.to_docx("# Hello\n\n- point").await?;
/// ```
#[derive(Debug, Clone)]
pub struct PulldownExportService {
    parser: MarkdownDocumentParser,

    /// Include default CSS styling for HTML output.
    include_default_css: bool,
}

impl Default for PulldownExportService {
    fn default() -> Self {
        Self::new()
    }
}

impl PulldownExportService {
    /// Create a new export service with default settings.
    pub fn new() -> Self {
        Self {
            parser: MarkdownDocumentParser::new(),
            include_default_css: true,
        }
    }

    /// Set whether HTML output carries the default CSS.
    pub fn with_default_css(mut self, include: bool) -> Self {
        self.include_default_css = include;
        self
    }

    /// Wrap HTML content in a complete document with styling.
    fn wrap_html(&self, body: String, title: &str) -> String {
        let css = if self.include_default_css {
            DEFAULT_CSS
        } else {
            ""
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
    <article class="proposal-document">
{body}
    </article>
</body>
</html>"#,
            title = html_escape(title),
            css = css,
            body = body
        )
    }

    /// Extract title from markdown content (first h1 heading, up to a colon).
    fn extract_title(&self, markdown: &str) -> String {
        for line in markdown.lines() {
            let trimmed = line.trim();
            if let Some(title) = trimmed.strip_prefix("# ") {
                return title.split(':').next().unwrap_or(title).trim().to_string();
            }
        }
        UNTITLED.to_string()
    }

    /// Maps one parsed block to a Word paragraph.
    fn block_to_paragraph(block: &MarkdownBlock) -> Paragraph {
        match block {
            MarkdownBlock::Blank => Paragraph::new(),
            MarkdownBlock::Heading { level, text } => Paragraph::new()
                .style(&heading_style_id(*level))
                .add_run(Run::new().add_text(text.as_str())),
            MarkdownBlock::Bullet { text } => Paragraph::new()
                .add_run(Run::new().add_text(format!("{}{}", WORD_BULLET_PREFIX, text))),
            MarkdownBlock::Text { text } => {
                Paragraph::new().add_run(Run::new().add_text(text.as_str()))
            }
        }
    }
}

#[async_trait]
impl DocumentExportService for PulldownExportService {
    async fn to_docx(&self, markdown: &str) -> Result<Vec<u8>, ExportError> {
        let blocks = self.parser.parse(markdown);

        let mut docx = heading_styles()
            .into_iter()
            .fold(Docx::new(), |docx, style| docx.add_style(style));
        for block in &blocks {
            docx = docx.add_paragraph(Self::block_to_paragraph(block));
        }

        let mut buffer = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buffer)
            .map_err(|e| ExportError::docx_failed(e.to_string()))?;

        let bytes = buffer.into_inner();
        debug!(paragraphs = blocks.len(), bytes = bytes.len(), "Built DOCX package");
        Ok(bytes)
    }

    async fn to_html(&self, markdown: &str) -> Result<String, ExportError> {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_SMART_PUNCTUATION;

        let parser = Parser::new_ext(markdown, options);

        let mut html_body = String::new();
        html::push_html(&mut html_body, parser);

        let title = self.extract_title(markdown);
        Ok(self.wrap_html(html_body, &title))
    }
}

/// Word style id for a markdown heading level.
///
/// Level 1 is the document title; out-of-range levels fall back to Heading2.
fn heading_style_id(level: u8) -> String {
    match level {
        1 => TITLE_STYLE.to_string(),
        2..=6 => format!("Heading{}", level),
        _ => "Heading2".to_string(),
    }
}

/// Paragraph styles referenced by exported headings. Sizes are half-points.
fn heading_styles() -> Vec<Style> {
    let title = Style::new(TITLE_STYLE, StyleType::Paragraph)
        .name(TITLE_STYLE)
        .size(52)
        .bold();

    let headings = [(2u8, 32usize), (3, 28), (4, 26), (5, 24), (6, 22)]
        .into_iter()
        .map(|(level, size)| {
            let id = heading_style_id(level);
            Style::new(&id, StyleType::Paragraph)
                .name(format!("heading {}", level))
                .size(size)
                .bold()
        });

    std::iter::once(title).chain(headings).collect()
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Default CSS for the HTML preview.
const DEFAULT_CSS: &str = r#"
:root {
    --accent-color: #0f766e;
    --text-color: #1f2937;
    --muted-color: #6b7280;
    --border-color: #e5e7eb;
    --bg-color: #ffffff;
}

* {
    box-sizing: border-box;
}

body {
    font-family: Georgia, 'Times New Roman', serif;
    font-size: 16px;
    line-height: 1.65;
    color: var(--text-color);
    background-color: var(--bg-color);
    padding: 2rem;
    max-width: 860px;
    margin: 0 auto;
}

.proposal-document {
    padding: 2rem;
}

h1, h2, h3, h4, h5, h6 {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Arial, sans-serif;
    margin-top: 1.5em;
    margin-bottom: 0.5em;
    font-weight: 600;
    line-height: 1.25;
}

h1 {
    font-size: 1.75rem;
    border-bottom: 2px solid var(--accent-color);
    padding-bottom: 0.5rem;
}

h2 {
    font-size: 1.35rem;
    color: var(--accent-color);
    border-bottom: 1px solid var(--border-color);
    padding-bottom: 0.25rem;
}

p {
    margin: 1em 0;
    text-align: justify;
}

ul {
    margin: 1em 0;
    padding-left: 2em;
}

li {
    margin: 0.25em 0;
}

strong {
    color: var(--muted-color);
}

@media print {
    body {
        font-size: 11pt;
        padding: 0;
    }

    .proposal-document {
        padding: 0;
    }

    h1, h2 {
        page-break-after: avoid;
    }
}
"#;

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
