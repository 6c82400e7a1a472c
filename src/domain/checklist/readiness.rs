//! Readiness checklist - Scores a proposal against the programme's submission checklist.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;
use crate::domain::proposal::{is_unset, ProposalRecord};

/// Heading substrings the checklist looks for in the generated document.
pub const AI_METHODOLOGY_ANCHOR: &str = "AI Methodology";
pub const WORK_PACKAGES_ANCHOR: &str = "Work Packages";
pub const BUDGET_SUMMARY_ANCHOR: &str = "Budget Summary";
pub const EXPECTED_OUTCOMES_ANCHOR: &str = "Expected Outcomes";

/// The anchors every generated document must contain.
pub const REQUIRED_ANCHORS: &[&str] = &[
    AI_METHODOLOGY_ANCHOR,
    WORK_PACKAGES_ANCHOR,
    BUDGET_SUMMARY_ANCHOR,
    EXPECTED_OUTCOMES_ANCHOR,
];

/// The ten checklist items, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistItem {
    Title,
    Pi,
    Objectives,
    Governance,
    Datasets,
    Ai,
    Wp,
    Budget,
    Risk,
    Impact,
}

impl ChecklistItem {
    /// Returns all items in display order.
    pub fn all() -> &'static [ChecklistItem] {
        &[
            ChecklistItem::Title,
            ChecklistItem::Pi,
            ChecklistItem::Objectives,
            ChecklistItem::Governance,
            ChecklistItem::Datasets,
            ChecklistItem::Ai,
            ChecklistItem::Wp,
            ChecklistItem::Budget,
            ChecklistItem::Risk,
            ChecklistItem::Impact,
        ]
    }

    /// Short identifier.
    pub fn id(&self) -> &'static str {
        match self {
            ChecklistItem::Title => "title",
            ChecklistItem::Pi => "pi",
            ChecklistItem::Objectives => "objectives",
            ChecklistItem::Governance => "governance",
            ChecklistItem::Datasets => "datasets",
            ChecklistItem::Ai => "ai",
            ChecklistItem::Wp => "wp",
            ChecklistItem::Budget => "budget",
            ChecklistItem::Risk => "risk",
            ChecklistItem::Impact => "impact",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ChecklistItem::Title => "Clear, scope-accurate title",
            ChecklistItem::Pi => "PI and Institution specified",
            ChecklistItem::Objectives => "Specific, measurable objectives",
            ChecklistItem::Governance => "Ethics, consent, and data governance",
            ChecklistItem::Datasets => "Datasets and sources identified",
            ChecklistItem::Ai => "AI methods and validation plan",
            ChecklistItem::Wp => "Work packages and milestones",
            ChecklistItem::Budget => "High-level budget rationale",
            ChecklistItem::Risk => "Risks and mitigations",
            ChecklistItem::Impact => "Expected outcomes and impact",
        }
    }

    /// Evaluates this item against the record and its generated markdown.
    pub fn is_satisfied(&self, record: &ProposalRecord, markdown: &str) -> bool {
        match self {
            ChecklistItem::Title => !is_unset(&record.title),
            ChecklistItem::Pi => !is_unset(&record.pi_name) && !is_unset(&record.institution),
            ChecklistItem::Objectives => !record.objectives.is_empty(),
            ChecklistItem::Governance => {
                !is_unset(&record.governance.consent_model)
                    && !is_unset(&record.governance.privacy_safeguards)
            }
            ChecklistItem::Datasets => !is_unset(&record.datasets_and_sources),
            ChecklistItem::Ai => markdown.contains(AI_METHODOLOGY_ANCHOR),
            ChecklistItem::Wp => markdown.contains(WORK_PACKAGES_ANCHOR),
            ChecklistItem::Budget => {
                !is_unset(&record.budget_summary) || markdown.contains(BUDGET_SUMMARY_ANCHOR)
            }
            // Counts only risks the user has entered; the default risk list
            // in the document does not satisfy the item.
            ChecklistItem::Risk => !record.risks.is_empty(),
            ChecklistItem::Impact => markdown.contains(EXPECTED_OUTCOMES_ANCHOR),
        }
    }
}

/// Outcome of one checklist item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistResult {
    pub item: ChecklistItem,
    pub passed: bool,
}

/// Full checklist evaluation with the overall readiness score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessReport {
    pub results: Vec<ChecklistResult>,
    pub score: Percentage,
}

impl ReadinessReport {
    /// Number of items that passed.
    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    /// Items that did not pass, in display order.
    pub fn outstanding(&self) -> Vec<ChecklistItem> {
        self.results
            .iter()
            .filter(|r| !r.passed)
            .map(|r| r.item)
            .collect()
    }

    /// Result for a single item.
    pub fn result_for(&self, item: ChecklistItem) -> Option<bool> {
        self.results.iter().find(|r| r.item == item).map(|r| r.passed)
    }
}

/// Scorer for the submission readiness checklist.
pub struct ChecklistScorer;

impl ChecklistScorer {
    /// Evaluates every item and computes the readiness score.
    ///
    /// Score is the share of passed items, rounded to a whole percent.
    pub fn evaluate(record: &ProposalRecord, markdown: &str) -> ReadinessReport {
        let results: Vec<ChecklistResult> = ChecklistItem::all()
            .iter()
            .map(|item| ChecklistResult {
                item: *item,
                passed: item.is_satisfied(record, markdown),
            })
            .collect();

        let passed = results.iter().filter(|r| r.passed).count();
        let score = Percentage::from_ratio(passed, results.len());

        ReadinessReport { results, score }
    }

    /// Anchors from [`REQUIRED_ANCHORS`] missing from `markdown`.
    pub fn missing_anchors(markdown: &str) -> Vec<&'static str> {
        REQUIRED_ANCHORS
            .iter()
            .filter(|anchor| !markdown.contains(**anchor))
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::proposal::{Objective, RiskItem};

    const ANCHORED: &str =
        "# T\n\n## AI Methodology and MLOps\n\n## Work Packages (WPs)\n\n## Budget Summary (High-Level)\n\n## Expected Outcomes and Impact";

    fn complete_record() -> ProposalRecord {
        let mut record = ProposalRecord::starter();
        record.pi_name = "Dr. Iyer".to_string();
        record.institution = "National Reference Centre".to_string();
        record.objectives = vec![Objective::new("Build the hub")];
        record.risks = vec![RiskItem::new("Drift", "Monitoring")];
        record
    }

    #[test]
    fn there_are_ten_items() {
        assert_eq!(ChecklistItem::all().len(), 10);
    }

    #[test]
    fn complete_record_scores_full_marks() {
        let report = ChecklistScorer::evaluate(&complete_record(), ANCHORED);
        assert_eq!(report.score, Percentage::HUNDRED);
        assert!(report.outstanding().is_empty());
    }

    #[test]
    fn empty_record_with_anchored_markdown_scores_forty() {
        // ai, wp, budget, impact come from the markdown alone
        let report = ChecklistScorer::evaluate(&ProposalRecord::default(), ANCHORED);
        assert_eq!(report.passed_count(), 4);
        assert_eq!(report.score.value(), 40);
    }

    #[test]
    fn empty_markdown_fails_anchor_items() {
        let report = ChecklistScorer::evaluate(&complete_record(), "");
        assert_eq!(report.result_for(ChecklistItem::Ai), Some(false));
        assert_eq!(report.result_for(ChecklistItem::Wp), Some(false));
        assert_eq!(report.result_for(ChecklistItem::Impact), Some(false));
    }

    #[test]
    fn budget_passes_from_record_even_without_anchor() {
        let mut record = ProposalRecord::default();
        record.budget_summary = "- Capital: 40%".to_string();
        let report = ChecklistScorer::evaluate(&record, "");
        assert_eq!(report.result_for(ChecklistItem::Budget), Some(true));
    }

    #[test]
    fn risk_requires_user_entered_risks() {
        let report = ChecklistScorer::evaluate(&ProposalRecord::default(), ANCHORED);
        assert_eq!(report.result_for(ChecklistItem::Risk), Some(false));
    }

    #[test]
    fn pi_requires_name_and_institution() {
        let mut record = ProposalRecord::default();
        record.pi_name = "Dr. Iyer".to_string();
        assert!(!ChecklistItem::Pi.is_satisfied(&record, ""));
        record.institution = "AIIMS".to_string();
        assert!(ChecklistItem::Pi.is_satisfied(&record, ""));
    }

    #[test]
    fn whitespace_title_counts_as_set() {
        let mut record = ProposalRecord::default();
        record.title = " ".to_string();
        assert!(ChecklistItem::Title.is_satisfied(&record, ""));
    }

    #[test]
    fn governance_ignores_stewardship() {
        let mut record = ProposalRecord::default();
        record.governance.consent_model = "Broad".to_string();
        record.governance.privacy_safeguards = "De-identification".to_string();
        assert!(ChecklistItem::Governance.is_satisfied(&record, ""));
    }

    #[test]
    fn missing_anchors_lists_absent_headings() {
        let missing = ChecklistScorer::missing_anchors("## AI Methodology and MLOps");
        assert_eq!(
            missing,
            vec![WORK_PACKAGES_ANCHOR, BUDGET_SUMMARY_ANCHOR, EXPECTED_OUTCOMES_ANCHOR]
        );
    }

    #[test]
    fn labels_match_ids() {
        assert_eq!(ChecklistItem::Wp.id(), "wp");
        assert_eq!(ChecklistItem::Wp.label(), "Work packages and milestones");
    }
}
