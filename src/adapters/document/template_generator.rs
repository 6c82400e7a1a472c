//! Template-based document generator adapter.
//!
//! Renders a proposal record into the programme's fixed section structure.
//! This is the primary implementation of the DocumentGenerator port.

use crate::domain::proposal::{is_unset, ProposalRecord, Site, DEFAULT_TITLE};
use crate::ports::{Depth, DocumentGenerator, GenerationOptions, SectionKind, Tone};

use super::proposal_template as text;

/// Separator between blocks of the document.
const BLOCK_SEPARATOR: &str = "\n\n";

/// Template-based implementation of DocumentGenerator.
///
/// Every section is a list of blocks (heading, paragraphs, lists). Blocks are
/// joined with a single blank line; the document never ends with a newline.
#[derive(Debug, Clone, Default)]
pub struct TemplateProposalGenerator;

impl TemplateProposalGenerator {
    /// Creates a new template proposal generator.
    pub fn new() -> Self {
        Self
    }

    fn title(&self, record: &ProposalRecord) -> Vec<String> {
        let title = if is_unset(&record.title) {
            DEFAULT_TITLE
        } else {
            record.title.as_str()
        };
        vec![heading(title, 1)]
    }

    fn abstract_section(&self, options: &GenerationOptions) -> Vec<String> {
        vec![
            section_heading(SectionKind::Abstract),
            humanize(paragraph(text::ABSTRACT), options.tone),
        ]
    }

    fn background(&self, options: &GenerationOptions) -> Vec<String> {
        let india = if options.include_india_context {
            text::INDIA_CONTEXT
        } else {
            ""
        };
        let [burden, translation] = text::BACKGROUND;
        vec![
            section_heading(SectionKind::Background),
            humanize(paragraph([burden, translation, india]), options.tone),
        ]
    }

    fn objectives(&self, record: &ProposalRecord) -> Vec<String> {
        let body = if record.objectives.is_empty() {
            list(text::DEFAULT_OBJECTIVES)
        } else {
            list(record.objectives.iter().map(|o| o.text.as_str()))
        };
        vec![section_heading(SectionKind::Objectives), body]
    }

    fn network(&self, record: &ProposalRecord, options: &GenerationOptions) -> Vec<String> {
        let site_lines: Vec<String> = record.named_sites().map(site_line).collect();
        let sites = if site_lines.is_empty() {
            text::DEFAULT_SITES.to_string()
        } else {
            site_lines.join("\n")
        };

        let governance = &record.governance;
        let governance_list = list([
            format!(
                "Data stewardship: {}",
                or_default(&governance.data_stewardship, text::DEFAULT_DATA_STEWARDSHIP)
            ),
            format!(
                "Consent model: {}",
                or_default(&governance.consent_model, text::DEFAULT_CONSENT_MODEL)
            ),
            format!(
                "Privacy safeguards: {}",
                or_default(&governance.privacy_safeguards, text::DEFAULT_PRIVACY_SAFEGUARDS)
            ),
        ]);

        vec![
            section_heading(SectionKind::Network),
            humanize(paragraph(text::NETWORK), options.tone),
            format!("{}\n{}", text::PLANNED_SITES_LEAD, sites),
            governance_list,
        ]
    }

    fn data_assets(&self, record: &ProposalRecord, options: &GenerationOptions) -> Vec<String> {
        let modalities = joined_or(&record.imaging_modalities, text::DEFAULT_MODALITIES);
        let diseases = joined_or(&record.disease_focus, text::DEFAULT_DISEASES);
        let sources = if is_unset(&record.datasets_and_sources) {
            String::new()
        } else {
            format!("Primary sources: {}", record.datasets_and_sources)
        };

        let curation = format!(
            "We will curate multi-institutional datasets covering {}, with standardized DICOM/OME-TIFF compliance and rich clinical metadata.",
            modalities
        );
        let cohorts = format!(
            "Datasets will include longitudinal cohorts to enable prognostic modeling for {}.",
            diseases
        );

        vec![
            section_heading(SectionKind::DataAssets),
            humanize(
                paragraph([
                    curation.as_str(),
                    text::DATA_QUALITY,
                    cohorts.as_str(),
                    sources.as_str(),
                ]),
                options.tone,
            ),
        ]
    }

    fn ai_methodology(&self, record: &ProposalRecord, options: &GenerationOptions) -> Vec<String> {
        let tasks = if record.ai_tasks.is_empty() {
            text::DEFAULT_AI_TASKS.join(", ")
        } else {
            record.ai_tasks.join(", ")
        };
        let focus = format!(
            "Model development will focus on {} with emphasis on robustness under domain shift and low-resource settings.",
            tasks
        );

        vec![
            section_heading(SectionKind::AiMethodology),
            humanize(
                paragraph([focus.as_str(), text::AI_PIPELINES, text::AI_FAIRNESS]),
                options.tone,
            ),
        ]
    }

    fn clinical_validation(&self, options: &GenerationOptions) -> Vec<String> {
        vec![
            section_heading(SectionKind::ClinicalValidation),
            humanize(paragraph(text::CLINICAL_VALIDATION), options.tone),
        ]
    }

    fn work_packages(&self) -> Vec<String> {
        vec![
            section_heading(SectionKind::WorkPackages),
            list(text::WORK_PACKAGES),
        ]
    }

    fn milestones(&self, record: &ProposalRecord) -> Vec<String> {
        let body = if is_unset(&record.milestones) {
            list(text::DEFAULT_MILESTONES)
        } else {
            record.milestones.clone()
        };
        let years = if record.timeline_years == 0 {
            text::DEFAULT_TIMELINE_YEARS
        } else {
            record.timeline_years
        };

        vec![
            section_heading(SectionKind::Milestones),
            body,
            format!("{} {} years", text::PROPOSED_DURATION_LEAD, years),
        ]
    }

    fn budget(&self, record: &ProposalRecord) -> Vec<String> {
        let body = if is_unset(&record.budget_summary) {
            list(text::DEFAULT_BUDGET)
        } else {
            record.budget_summary.clone()
        };
        vec![section_heading(SectionKind::Budget), body]
    }

    fn risks(&self, record: &ProposalRecord) -> Vec<String> {
        let body = if record.risks.is_empty() {
            list(text::DEFAULT_RISKS)
        } else {
            list(
                record
                    .risks
                    .iter()
                    .map(|r| format!("{} \u{2013} Mitigation: {}", r.risk, r.mitigation)),
            )
        };
        vec![section_heading(SectionKind::Risks), body]
    }

    fn expected_outcomes(
        &self,
        record: &ProposalRecord,
        options: &GenerationOptions,
    ) -> Vec<String> {
        let outcomes = or_default(&record.expected_outcomes, text::DEFAULT_EXPECTED_OUTCOMES);
        vec![
            section_heading(SectionKind::ExpectedOutcomes),
            humanize(paragraph([outcomes, text::OUTCOMES_CLOSING]), options.tone),
        ]
    }

    fn team(&self, record: &ProposalRecord, options: &GenerationOptions) -> Vec<String> {
        let roles = format!(
            "PI: {}; Institution: {}; Co-PIs: {}.",
            or_default(&record.pi_name, text::PI_PLACEHOLDER),
            or_default(&record.institution, text::UNSET_PLACEHOLDER),
            or_default(&record.co_pis, text::UNSET_PLACEHOLDER),
        );
        let [pmo, board] = text::TEAM_MANAGEMENT;

        vec![
            section_heading(SectionKind::Team),
            humanize(paragraph([roles.as_str(), pmo, board]), options.tone),
        ]
    }

    fn annexes(&self) -> Vec<String> {
        vec![section_heading(SectionKind::Annexes), list(text::ANNEXES)]
    }

    fn contact(&self, record: &ProposalRecord) -> Option<Vec<String>> {
        let mut parts = Vec::new();
        if !is_unset(&record.email) {
            parts.push(format!("Email: {}", record.email));
        }
        if !is_unset(&record.phone) {
            parts.push(format!("Phone: {}", record.phone));
        }
        if parts.is_empty() {
            return None;
        }
        Some(vec![
            section_heading(SectionKind::Contact),
            parts.join(text::CONTACT_SEPARATOR),
        ])
    }

    /// Blocks for one section, `None` when the section is omitted.
    fn section_blocks(
        &self,
        section: SectionKind,
        record: &ProposalRecord,
        options: &GenerationOptions,
    ) -> Option<Vec<String>> {
        let blocks = match section {
            SectionKind::Title => self.title(record),
            SectionKind::Abstract => self.abstract_section(options),
            SectionKind::Background => self.background(options),
            SectionKind::Objectives => self.objectives(record),
            SectionKind::Network => self.network(record, options),
            SectionKind::DataAssets => self.data_assets(record, options),
            SectionKind::AiMethodology => self.ai_methodology(record, options),
            SectionKind::ClinicalValidation => self.clinical_validation(options),
            SectionKind::WorkPackages => self.work_packages(),
            SectionKind::Milestones => self.milestones(record),
            SectionKind::Budget => self.budget(record),
            SectionKind::Risks => self.risks(record),
            SectionKind::ExpectedOutcomes => self.expected_outcomes(record, options),
            SectionKind::Team => self.team(record, options),
            SectionKind::Annexes => self.annexes(),
            SectionKind::Contact => return self.contact(record),
        };
        Some(blocks)
    }
}

impl DocumentGenerator for TemplateProposalGenerator {
    fn generate(&self, record: &ProposalRecord, options: &GenerationOptions) -> String {
        // Depth is accepted for every level; section content does not vary with it.
        match options.depth {
            Depth::Concise | Depth::Standard | Depth::Comprehensive => {}
        }

        SectionKind::all()
            .iter()
            .filter_map(|section| self.section_blocks(*section, record, options))
            .flatten()
            .collect::<Vec<_>>()
            .join(BLOCK_SEPARATOR)
    }

    fn generate_section(
        &self,
        section: SectionKind,
        record: &ProposalRecord,
        options: &GenerationOptions,
    ) -> Option<String> {
        self.section_blocks(section, record, options)
            .map(|blocks| blocks.join(BLOCK_SEPARATOR))
    }
}

// ───────────────────────────────────────────────────────────────
// Formatting helpers
// ───────────────────────────────────────────────────────────────

/// Joins the non-empty sentences with single spaces.
fn paragraph<I, S>(sentences: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    sentences
        .into_iter()
        .filter(|s| !s.as_ref().is_empty())
        .map(|s| s.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// One `- item` line per entry.
fn list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| format!("- {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn heading(text: &str, level: usize) -> String {
    format!("{} {}", "#".repeat(level), text)
}

fn section_heading(section: SectionKind) -> String {
    heading(section.heading().unwrap_or_default(), 2)
}

/// Adjusts prose to the requested tone. All tones currently share one register.
fn humanize(text: String, tone: Tone) -> String {
    match tone {
        Tone::HumanizedFormal => text,
        Tone::Formal => text,
        Tone::Conversational => text,
    }
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if is_unset(value) {
        default
    } else {
        value
    }
}

fn joined_or(values: &[String], default: &str) -> String {
    if values.is_empty() {
        default.to_string()
    } else {
        values.join(", ")
    }
}

fn site_line(site: &Site) -> String {
    let mut line = site.name.clone();
    if let Some(city) = site.city() {
        line.push_str(&format!(" ({})", city));
    }
    line.push_str(&format!(" \u{2013} {}", site.role.label()));
    if let Some(capabilities) = site.capabilities() {
        line.push_str(&format!(": {}", capabilities));
    }
    line
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::proposal::{Objective, RiskItem, SiteRole};

    fn test_generator() -> TemplateProposalGenerator {
        TemplateProposalGenerator::new()
    }

    fn options() -> GenerationOptions {
        GenerationOptions::default()
    }

    // ───────────────────────────────────────────────────────────────
    // Helper tests
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn paragraph_drops_empty_segments() {
        assert_eq!(paragraph(["A.", "", "B."]), "A. B.");
        assert_eq!(paragraph(Vec::<String>::new()), "");
    }

    #[test]
    fn list_prefixes_each_item() {
        assert_eq!(list(["one", "two"]), "- one\n- two");
    }

    #[test]
    fn heading_repeats_hashes() {
        assert_eq!(heading("Budget", 2), "## Budget");
        assert_eq!(heading("Title", 1), "# Title");
    }

    #[test]
    fn humanize_is_identity_for_every_tone() {
        for tone in [Tone::HumanizedFormal, Tone::Formal, Tone::Conversational] {
            assert_eq!(humanize("Same text.".to_string(), tone), "Same text.");
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Title section
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn empty_title_uses_default() {
        let record = ProposalRecord::default();
        let doc = test_generator().generate(&record, &options());
        assert!(doc.starts_with(&format!("# {}\n\n## Abstract", DEFAULT_TITLE)));
    }

    #[test]
    fn whitespace_title_is_kept() {
        let mut record = ProposalRecord::default();
        record.title = "   ".to_string();
        let title = test_generator()
            .generate_section(SectionKind::Title, &record, &options())
            .unwrap();
        assert_eq!(title, "#    ");
    }

    // ───────────────────────────────────────────────────────────────
    // Background section
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn india_context_is_gated_by_option() {
        let record = ProposalRecord::default();
        let gen = test_generator();

        let with = gen.generate(&record, &options());
        let without = gen.generate(&record, &options().with_india_context(false));

        assert!(with.contains("sovereignty, security, and equitable access"));
        assert!(!without.contains("sovereignty"));
        assert!(!without.contains("  "));
    }

    #[test]
    fn background_without_india_context_has_two_sentences() {
        let section = test_generator()
            .generate_section(
                SectionKind::Background,
                &ProposalRecord::default(),
                &options().with_india_context(false),
            )
            .unwrap();
        assert!(section.ends_with("reflective of the Indian population."));
    }

    // ───────────────────────────────────────────────────────────────
    // Objectives section
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn objectives_default_to_five_items() {
        let section = test_generator()
            .generate_section(SectionKind::Objectives, &ProposalRecord::default(), &options())
            .unwrap();
        assert_eq!(section.lines().filter(|l| l.starts_with("- ")).count(), 5);
    }

    #[test]
    fn objectives_keep_input_order() {
        let mut record = ProposalRecord::default();
        record.objectives = vec![Objective::new("A"), Objective::new("B")];
        let section = test_generator()
            .generate_section(SectionKind::Objectives, &record, &options())
            .unwrap();
        assert_eq!(section, "## Specific Objectives\n\n- A\n- B");
    }

    // ───────────────────────────────────────────────────────────────
    // Network section
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn site_line_formats_all_segments() {
        let site = Site::try_new("AIIMS", SiteRole::Hub)
            .unwrap()
            .with_city("Delhi")
            .with_capabilities("WSI");
        assert_eq!(site_line(&site), "AIIMS (Delhi) \u{2013} HUB: WSI");
    }

    #[test]
    fn site_line_omits_missing_segments() {
        let site = Site::try_new("X", SiteRole::Spoke).unwrap();
        assert_eq!(site_line(&site), "X \u{2013} SPOKE");
    }

    #[test]
    fn no_sites_uses_default_sentence() {
        let section = test_generator()
            .generate_section(SectionKind::Network, &ProposalRecord::default(), &options())
            .unwrap();
        assert!(section.contains(&format!("**Planned sites:**\n{}", text::DEFAULT_SITES)));
    }

    #[test]
    fn unnamed_sites_are_skipped() {
        let mut record = ProposalRecord::default();
        record.sites = vec![Site {
            name: "  ".to_string(),
            ..Site::default()
        }];
        let section = test_generator()
            .generate_section(SectionKind::Network, &record, &options())
            .unwrap();
        assert!(section.contains(text::DEFAULT_SITES));
    }

    #[test]
    fn governance_fields_default_independently() {
        let mut record = ProposalRecord::default();
        record.governance.consent_model = "Broad consent".to_string();
        let section = test_generator()
            .generate_section(SectionKind::Network, &record, &options())
            .unwrap();
        assert!(section.contains("- Consent model: Broad consent"));
        assert!(section.contains(&format!(
            "- Data stewardship: {}",
            text::DEFAULT_DATA_STEWARDSHIP
        )));
    }

    // ───────────────────────────────────────────────────────────────
    // Data assets / AI sections
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn data_assets_interpolates_lists() {
        let mut record = ProposalRecord::default();
        record.imaging_modalities = vec!["WSI".to_string(), "CT".to_string()];
        record.disease_focus = vec!["TB".to_string()];
        let section = test_generator()
            .generate_section(SectionKind::DataAssets, &record, &options())
            .unwrap();
        assert!(section.contains("covering WSI, CT, with standardized"));
        assert!(section.contains("prognostic modeling for TB."));
        assert!(!section.contains("Primary sources"));
    }

    #[test]
    fn primary_sources_only_when_set() {
        let mut record = ProposalRecord::default();
        record.datasets_and_sources = "NCG hospitals".to_string();
        let section = test_generator()
            .generate_section(SectionKind::DataAssets, &record, &options())
            .unwrap();
        assert!(section.ends_with("Primary sources: NCG hospitals"));
    }

    #[test]
    fn ai_tasks_default_list() {
        let section = test_generator()
            .generate_section(SectionKind::AiMethodology, &ProposalRecord::default(), &options())
            .unwrap();
        assert!(section.contains(
            "focus on detection, segmentation, grading, risk stratification, treatment response prediction with"
        ));
    }

    // ───────────────────────────────────────────────────────────────
    // Milestones / budget / risks
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn milestones_pass_through_verbatim() {
        let mut record = ProposalRecord::default();
        record.milestones = "- Y1: setup\n- Y2: scale".to_string();
        record.timeline_years = 5;
        let section = test_generator()
            .generate_section(SectionKind::Milestones, &record, &options())
            .unwrap();
        assert_eq!(
            section,
            "## Milestones and Timeline\n\n- Y1: setup\n- Y2: scale\n\n**Proposed duration:** 5 years"
        );
    }

    #[test]
    fn whitespace_milestones_pass_through() {
        let mut record = ProposalRecord::default();
        record.milestones = "   ".to_string();
        let section = test_generator()
            .generate_section(SectionKind::Milestones, &record, &options())
            .unwrap();
        assert_eq!(
            section,
            "## Milestones and Timeline\n\n   \n\n**Proposed duration:** 3 years"
        );
    }

    #[test]
    fn whitespace_budget_passes_through() {
        let mut record = ProposalRecord::default();
        record.budget_summary = " ".to_string();
        let section = test_generator()
            .generate_section(SectionKind::Budget, &record, &options())
            .unwrap();
        assert_eq!(section, "## Budget Summary (High-Level)\n\n ");
    }

    #[test]
    fn zero_timeline_defaults_to_three_years() {
        let section = test_generator()
            .generate_section(SectionKind::Milestones, &ProposalRecord::default(), &options())
            .unwrap();
        assert!(section.ends_with("**Proposed duration:** 3 years"));
    }

    #[test]
    fn negative_timeline_is_printed_as_is() {
        let mut record = ProposalRecord::default();
        record.timeline_years = -2;
        let section = test_generator()
            .generate_section(SectionKind::Milestones, &record, &options())
            .unwrap();
        assert!(section.ends_with("**Proposed duration:** -2 years"));
    }

    #[test]
    fn budget_defaults_to_four_items() {
        let section = test_generator()
            .generate_section(SectionKind::Budget, &ProposalRecord::default(), &options())
            .unwrap();
        assert_eq!(section.lines().filter(|l| l.starts_with("- ")).count(), 4);
    }

    #[test]
    fn risks_render_with_mitigation() {
        let mut record = ProposalRecord::default();
        record.risks = vec![RiskItem::new("Drift", "Monitoring")];
        let section = test_generator()
            .generate_section(SectionKind::Risks, &record, &options())
            .unwrap();
        assert_eq!(
            section,
            "## Risks and Mitigations\n\n- Drift \u{2013} Mitigation: Monitoring"
        );
    }

    // ───────────────────────────────────────────────────────────────
    // Team / contact
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn team_uses_placeholders() {
        let section = test_generator()
            .generate_section(SectionKind::Team, &ProposalRecord::default(), &options())
            .unwrap();
        assert!(section.contains("PI: To be finalized; Institution: \u{2014}; Co-PIs: \u{2014}."));
    }

    #[test]
    fn contact_omitted_without_details() {
        let gen = test_generator();
        let record = ProposalRecord::default();
        assert!(gen
            .generate_section(SectionKind::Contact, &record, &options())
            .is_none());
        assert!(!gen.generate(&record, &options()).contains("## Contact"));
    }

    #[test]
    fn contact_joins_email_and_phone() {
        let mut record = ProposalRecord::default();
        record.email = "pi@example.org".to_string();
        record.phone = "+91 11 0000".to_string();
        let doc = test_generator().generate(&record, &options());
        assert!(doc.ends_with("## Contact\n\nEmail: pi@example.org | Phone: +91 11 0000"));
    }

    #[test]
    fn whitespace_email_still_opens_contact() {
        let mut record = ProposalRecord::default();
        record.email = " ".to_string();
        let section = test_generator()
            .generate_section(SectionKind::Contact, &record, &options())
            .unwrap();
        assert_eq!(section, "## Contact\n\nEmail:  ");
    }

    #[test]
    fn contact_with_phone_only() {
        let mut record = ProposalRecord::default();
        record.phone = "12345".to_string();
        let section = test_generator()
            .generate_section(SectionKind::Contact, &record, &options())
            .unwrap();
        assert_eq!(section, "## Contact\n\nPhone: 12345");
    }

    // ───────────────────────────────────────────────────────────────
    // Whole document
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn sections_appear_in_canonical_order() {
        let doc = test_generator().generate(&ProposalRecord::starter(), &options());
        let positions: Vec<usize> = SectionKind::all()
            .iter()
            .filter_map(|s| s.heading())
            .filter(|h| *h != "Contact")
            .map(|h| doc.find(&format!("## {}", h)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn generate_equals_joined_sections() {
        let gen = test_generator();
        let record = ProposalRecord::starter();
        let joined = SectionKind::all()
            .iter()
            .filter_map(|s| gen.generate_section(*s, &record, &options()))
            .collect::<Vec<_>>()
            .join("\n\n");
        assert_eq!(gen.generate(&record, &options()), joined);
    }

    #[test]
    fn depth_does_not_change_output() {
        let gen = test_generator();
        let record = ProposalRecord::starter();
        let concise = gen.generate(&record, &options().with_depth(Depth::Concise));
        let comprehensive = gen.generate(&record, &options().with_depth(Depth::Comprehensive));
        assert_eq!(concise, comprehensive);
    }

    #[test]
    fn output_never_ends_with_newline() {
        let doc = test_generator().generate(&ProposalRecord::default(), &options());
        assert!(!doc.ends_with('\n'));
        assert!(!doc.contains("\n\n\n"));
    }
}
