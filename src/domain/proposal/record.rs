//! The structured proposal record supplied by the form.

use serde::{Deserialize, Deserializer, Serialize};

use super::{RiskItem, Site};
use crate::domain::foundation::ObjectiveId;

/// Long-form programme title used when the record has none.
pub const DEFAULT_TITLE: &str = "Establishment of a National Network for AI-Enabled Imaging Biobank on Onco-pathology and Infectious Diseases: A Hub-and-Spoke Model for India-Specific Diagnostic and Prognostic Tools";

/// One specific objective of the programme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Objective {
    pub id: ObjectiveId,
    pub text: String,
}

impl Objective {
    /// Creates an objective with a freshly assigned identifier.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: ObjectiveId::new(),
            text: text.into(),
        }
    }
}

/// Data governance commitments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Governance {
    pub data_stewardship: String,
    pub consent_model: String,
    pub privacy_safeguards: String,
}

/// Everything the user has entered about the proposal.
///
/// Every field tolerates its empty value: empty strings and empty lists are
/// replaced by programme defaults when the document is generated. A
/// `timeline_years` of zero means "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProposalRecord {
    pub title: String,
    pub pi_name: String,
    pub institution: String,
    #[serde(rename = "coPIs")]
    pub co_pis: String,
    pub email: String,
    pub phone: String,
    pub summary_notes: String,

    pub disease_focus: Vec<String>,
    pub imaging_modalities: Vec<String>,
    pub ai_tasks: Vec<String>,
    pub objectives: Vec<Objective>,
    pub sites: Vec<Site>,
    pub governance: Governance,

    pub datasets_and_sources: String,
    pub milestones: String,
    #[serde(deserialize_with = "deserialize_risks")]
    pub risks: Vec<RiskItem>,
    pub budget_summary: String,
    pub timeline_years: i64,
    pub expected_outcomes: String,
}

impl ProposalRecord {
    /// The record a fresh form starts from.
    ///
    /// Pre-fills the programme title, classification lists, governance
    /// phrases and primary sources; leaves people, contact details and the
    /// repeatable lists empty.
    pub fn starter() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            disease_focus: strings(&["Onco-pathology", "Tuberculosis"]),
            imaging_modalities: strings(&["WSI", "CT", "X-ray", "Ultrasound"]),
            ai_tasks: strings(&["Diagnosis", "Prognosis", "Triage"]),
            governance: Governance {
                data_stewardship: "Central policy, local custodianship, audit trails".to_string(),
                consent_model: "Tiered broad consent with dynamic withdrawal".to_string(),
                privacy_safeguards: "PHI scrubbing, k-anonymity, DP (where apt)".to_string(),
            },
            datasets_and_sources:
                "National cancer centres, medical colleges, TB programmes, and partner hospitals"
                    .to_string(),
            timeline_years: 3,
            ..Self::default()
        }
    }

    /// Sites that will be listed, in input order.
    pub fn named_sites(&self) -> impl Iterator<Item = &Site> {
        self.sites.iter().filter(|s| s.is_named())
    }
}

/// A risk as written in a proposal file: either a `risk`/`mitigation` map or
/// a one-line `Risk – Mitigation` entry.
#[derive(Deserialize)]
#[serde(untagged)]
enum RiskEntry {
    Line(String),
    Item(RiskItem),
}

fn deserialize_risks<'de, D>(deserializer: D) -> Result<Vec<RiskItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<RiskEntry>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .map(|entry| match entry {
            RiskEntry::Line(line) => RiskItem::from_entry(&line),
            RiskEntry::Item(item) => item,
        })
        .collect())
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// True when a free-text field counts as unset.
///
/// Only the empty string is unset; whitespace is user content and is kept.
pub fn is_unset(value: &str) -> bool {
    value.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::proposal::{SiteRole, DEFAULT_MITIGATION};

    #[test]
    fn default_record_is_entirely_blank() {
        let record = ProposalRecord::default();
        assert!(record.title.is_empty());
        assert!(record.objectives.is_empty());
        assert_eq!(record.timeline_years, 0);
    }

    #[test]
    fn starter_prefills_form_defaults() {
        let record = ProposalRecord::starter();
        assert_eq!(record.title, DEFAULT_TITLE);
        assert_eq!(record.disease_focus, vec!["Onco-pathology", "Tuberculosis"]);
        assert_eq!(record.imaging_modalities.len(), 4);
        assert_eq!(record.timeline_years, 3);
        assert!(record.pi_name.is_empty());
        assert!(record.risks.is_empty());
    }

    #[test]
    fn deserializes_camel_case_form_fields() {
        let record: ProposalRecord = serde_json::from_str(
            r#"{
                "title": "Imaging Biobank",
                "piName": "Dr. Rao",
                "coPIs": "Dr. Sen",
                "timelineYears": 4,
                "governance": {"consentModel": "Broad consent"},
                "objectives": [{"text": "Build the hub"}]
            }"#,
        )
        .unwrap();

        assert_eq!(record.pi_name, "Dr. Rao");
        assert_eq!(record.co_pis, "Dr. Sen");
        assert_eq!(record.timeline_years, 4);
        assert_eq!(record.governance.consent_model, "Broad consent");
        assert!(record.governance.privacy_safeguards.is_empty());
        assert_eq!(record.objectives[0].text, "Build the hub");
    }

    #[test]
    fn risks_accept_one_line_entries() {
        let record: ProposalRecord = serde_json::from_str(
            r#"{
                "risks": [
                    "Scanner downtime – Service contracts",
                    "Procurement delays",
                    {"risk": "Drift", "mitigation": "Monitoring"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(
            record.risks,
            vec![
                RiskItem::new("Scanner downtime", "Service contracts"),
                RiskItem::new("Procurement delays", DEFAULT_MITIGATION),
                RiskItem::new("Drift", "Monitoring"),
            ]
        );
    }

    #[test]
    fn serializes_co_pis_with_form_name() {
        let json = serde_json::to_value(ProposalRecord::default()).unwrap();
        assert!(json.get("coPIs").is_some());
        assert!(json.get("piName").is_some());
    }

    #[test]
    fn named_sites_skips_blank_names() {
        let record = ProposalRecord {
            sites: vec![
                Site::try_new("Hub1", SiteRole::Hub).unwrap(),
                Site::default(),
            ],
            ..ProposalRecord::default()
        };
        assert_eq!(record.named_sites().count(), 1);
    }

    #[test]
    fn objectives_get_distinct_ids() {
        assert_ne!(Objective::new("A").id, Objective::new("A").id);
    }

    #[test]
    fn only_empty_string_is_unset() {
        assert!(is_unset(""));
        assert!(!is_unset("  \n"));
        assert!(!is_unset(" x "));
    }
}
