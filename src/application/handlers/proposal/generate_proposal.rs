//! GenerateProposalHandler - Renders a proposal and scores its readiness.
//!
//! Produces content without side effects: the markdown document plus the
//! checklist report computed from the record and that markdown.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::checklist::{ChecklistScorer, ReadinessReport};
use crate::domain::document::MarkdownContent;
use crate::domain::proposal::ProposalRecord;
use crate::ports::{DocumentGenerator, GenerationOptions};

/// Command to generate a proposal document.
#[derive(Debug, Clone)]
pub struct GenerateProposalCommand {
    /// The proposal to render.
    pub record: ProposalRecord,
    /// Tone, depth and context options.
    pub options: GenerationOptions,
}

impl GenerateProposalCommand {
    pub fn new(record: ProposalRecord, options: GenerationOptions) -> Self {
        Self { record, options }
    }

    /// Generates with the default options.
    pub fn with_defaults(record: ProposalRecord) -> Self {
        Self::new(record, GenerationOptions::default())
    }
}

/// Result of successful proposal generation.
#[derive(Debug, Clone)]
pub struct GenerateProposalResult {
    /// The generated markdown content.
    pub content: MarkdownContent,
    /// Checklist evaluation of the record and content.
    pub readiness: ReadinessReport,
    /// The options used.
    pub options: GenerationOptions,
}

/// Handler for generating proposal documents.
///
/// # Dependencies
///
/// - `DocumentGenerator`: Render markdown content
///
/// # Usage
///
/// ```rust,ignore
/// let handler = GenerateProposalHandler::new(generator);
/// let result = handler.handle(GenerateProposalCommand::with_defaults(record));
/// println!("{}", result.content.raw());
/// ```
pub struct GenerateProposalHandler {
    document_generator: Arc<dyn DocumentGenerator>,
}

impl GenerateProposalHandler {
    pub fn new(document_generator: Arc<dyn DocumentGenerator>) -> Self {
        Self { document_generator }
    }

    pub fn handle(&self, cmd: GenerateProposalCommand) -> GenerateProposalResult {
        let markdown = self.document_generator.generate(&cmd.record, &cmd.options);
        let readiness = ChecklistScorer::evaluate(&cmd.record, &markdown);
        let content = MarkdownContent::new(markdown);

        debug!(
            tone = %cmd.options.tone,
            depth = %cmd.options.depth,
            include_india_context = cmd.options.include_india_context,
            size_bytes = content.size_bytes(),
            "Proposal generated"
        );
        info!(
            score = readiness.score.value(),
            outstanding = readiness.outstanding().len(),
            "Readiness evaluated"
        );

        GenerateProposalResult {
            content,
            readiness,
            options: cmd.options,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
