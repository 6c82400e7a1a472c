//! Document Generator Port - Markdown generation interface.
//!
//! This port defines the contract for rendering a proposal record into the
//! proposal markdown document. Handlers depend on this trait, while adapters
//! (like TemplateProposalGenerator) provide the implementation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;
use crate::domain::proposal::ProposalRecord;

/// Port for generating the proposal document.
///
/// # Contract
///
/// Implementations must:
/// - Be total: every record renders, blanks are replaced by defaults
/// - Be pure: identical inputs yield byte-identical output
/// - Never mutate the record
/// - Emit only the exporter's markdown subset (ATX headings, `- ` bullets,
///   plain lines, blank separators, the two bold lead-ins)
/// - Always emit the anchor headings the readiness checklist looks for
///
/// # Usage
///
/// ```rust,ignore
/// let generator: &dyn DocumentGenerator = get_generator();
///
/// // Full document
/// let markdown = generator.generate(&record, &GenerationOptions::default());
///
/// // One section, e.g. to refresh a preview pane
/// let risks = generator.generate_section(SectionKind::Risks, &record, &options);
/// ```
pub trait DocumentGenerator: Send + Sync {
    /// Generate the full markdown document.
    fn generate(&self, record: &ProposalRecord, options: &GenerationOptions) -> String;

    /// Generate a single section.
    ///
    /// Returns `None` only for sections that are omitted for this record
    /// (the contact section without contact details).
    fn generate_section(
        &self,
        section: SectionKind,
        record: &ProposalRecord,
        options: &GenerationOptions,
    ) -> Option<String>;
}

/// Options for document generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationOptions {
    /// Register of the prose paragraphs.
    pub tone: Tone,

    /// Requested section length. Reserved; does not change the output.
    pub depth: Depth,

    /// Include the data-sovereignty sentence in the background section.
    pub include_india_context: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            tone: Tone::HumanizedFormal,
            depth: Depth::Comprehensive,
            include_india_context: true,
        }
    }
}

impl GenerationOptions {
    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn with_depth(mut self, depth: Depth) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_india_context(mut self, include: bool) -> Self {
        self.include_india_context = include;
        self
    }
}

/// Writing tone for prose paragraphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    #[default]
    HumanizedFormal,
    Formal,
    Conversational,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::HumanizedFormal => "humanized-formal",
            Tone::Formal => "formal",
            Tone::Conversational => "conversational",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "humanized-formal" | "humanized_formal" => Ok(Tone::HumanizedFormal),
            "formal" => Ok(Tone::Formal),
            "conversational" => Ok(Tone::Conversational),
            _ => Err(ValidationError::invalid_format(
                "tone",
                format!("unknown tone '{}'", s),
            )),
        }
    }
}

/// Requested level of detail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Depth {
    Concise,
    Standard,
    #[default]
    Comprehensive,
}

impl Depth {
    pub fn as_str(&self) -> &'static str {
        match self {
            Depth::Concise => "concise",
            Depth::Standard => "standard",
            Depth::Comprehensive => "comprehensive",
        }
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Depth {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "concise" => Ok(Depth::Concise),
            "standard" => Ok(Depth::Standard),
            "comprehensive" => Ok(Depth::Comprehensive),
            _ => Err(ValidationError::invalid_format(
                "depth",
                format!("unknown depth '{}'", s),
            )),
        }
    }
}

/// The sections of a proposal document, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Title,
    Abstract,
    Background,
    Objectives,
    Network,
    DataAssets,
    AiMethodology,
    ClinicalValidation,
    WorkPackages,
    Milestones,
    Budget,
    Risks,
    ExpectedOutcomes,
    Team,
    Annexes,
    Contact,
}

impl SectionKind {
    /// Returns all sections in canonical order.
    pub fn all() -> &'static [SectionKind] {
        &[
            SectionKind::Title,
            SectionKind::Abstract,
            SectionKind::Background,
            SectionKind::Objectives,
            SectionKind::Network,
            SectionKind::DataAssets,
            SectionKind::AiMethodology,
            SectionKind::ClinicalValidation,
            SectionKind::WorkPackages,
            SectionKind::Milestones,
            SectionKind::Budget,
            SectionKind::Risks,
            SectionKind::ExpectedOutcomes,
            SectionKind::Team,
            SectionKind::Annexes,
            SectionKind::Contact,
        ]
    }

    /// H2 heading text. `None` for the title, whose heading is the proposal title.
    pub fn heading(&self) -> Option<&'static str> {
        match self {
            SectionKind::Title => None,
            SectionKind::Abstract => Some("Abstract"),
            SectionKind::Background => Some("Background and Rationale"),
            SectionKind::Objectives => Some("Specific Objectives"),
            SectionKind::Network => Some("Network Architecture and Governance"),
            SectionKind::DataAssets => Some("Data Assets and Curation"),
            SectionKind::AiMethodology => Some("AI Methodology and MLOps"),
            SectionKind::ClinicalValidation => Some("Clinical Validation and Deployment"),
            SectionKind::WorkPackages => Some("Work Packages (WPs)"),
            SectionKind::Milestones => Some("Milestones and Timeline"),
            SectionKind::Budget => Some("Budget Summary (High-Level)"),
            SectionKind::Risks => Some("Risks and Mitigations"),
            SectionKind::ExpectedOutcomes => Some("Expected Outcomes and Impact"),
            SectionKind::Team => Some("Team, Roles, and Programme Management"),
            SectionKind::Annexes => Some("Annexes (Illustrative)"),
            SectionKind::Contact => Some("Contact"),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
