//! Fixed prose of the proposal template.
//!
//! Sentences and default lists used by `TemplateProposalGenerator` when the
//! record leaves a field blank, plus the boilerplate every proposal carries.

pub(crate) const ABSTRACT: [&str; 3] = [
    "We propose a coordinated, nation-scale imaging biobank to accelerate trustworthy AI for onco-pathology and infectious diseases using a federated hub-and-spoke model across India.",
    "The network will curate high-quality, consented, and standards-compliant datasets spanning histopathology, radiology, and point-of-care imaging, paired with harmonized clinical descriptors.",
    "By enabling privacy-preserving model development and rigorous multi-site validation, the programme will deliver India-specific diagnostic and prognostic tools ready for real-world use across public and private care settings.",
];

pub(crate) const BACKGROUND: [&str; 2] = [
    "India faces a dual burden of cancer and infectious diseases, with significant variation in presentation, comorbidities, and care pathways across regions.",
    "While AI has shown promise internationally, translation stalls without representative datasets, interoperable standards, and clinical validation reflective of the Indian population.",
];

pub(crate) const INDIA_CONTEXT: &str = "A national imaging biobank that respects India\u{2019}s data governance priorities\u{2014}sovereignty, security, and equitable access\u{2014}can unlock robust AI models that generalize across Bharat\u{2019}s linguistic, socio-economic, and infrastructural diversity.";

pub(crate) const DEFAULT_OBJECTIVES: [&str; 5] = [
    "Establish a hub-and-spoke imaging biobank with harmonized data standards and governance.",
    "Curate diverse, high-quality imaging datasets for onco-pathology and infectious diseases.",
    "Develop and benchmark AI pipelines for diagnosis, prognosis, and triage under Indian conditions.",
    "Validate models across multiple sites and implement MLOps for safe deployment and monitoring.",
    "Enable capacity building, reproducible research, and open standards to catalyze innovation.",
];

pub(crate) const NETWORK: [&str; 3] = [
    "We will implement a federated hub-and-spoke architecture enabling local data custody at spokes with centralized orchestration at the hub.",
    "Data flow will follow a \"model-to-data\" paradigm where feasible, minimizing data movement and enhancing privacy.",
    "Core services at the hub include identity and access management, schema/ontology services, QC pipelines, model registry, and monitoring.",
];

pub(crate) const PLANNED_SITES_LEAD: &str = "**Planned sites:**";

pub(crate) const DEFAULT_SITES: &str = "Hub at a national reference centre; 6\u{2013}10 spokes including medical colleges, cancer centres, and infectious disease hospitals across zones.";

pub(crate) const DEFAULT_DATA_STEWARDSHIP: &str =
    "central policy with local custodianship and audit trails";
pub(crate) const DEFAULT_CONSENT_MODEL: &str =
    "tiered broad consent with community engagement and dynamic withdrawal options";
pub(crate) const DEFAULT_PRIVACY_SAFEGUARDS: &str =
    "de-identification, PHI scrubbing, k-anonymity thresholds, differential privacy where applicable";

pub(crate) const DEFAULT_MODALITIES: &str =
    "histopathology (WSI), radiology (CT/MRI/X-ray), ultrasound/POCUS, and digital microscopy";
pub(crate) const DEFAULT_DISEASES: &str =
    "breast, head-and-neck, and GI cancers; TB, dengue, and other priority infections";
pub(crate) const DATA_QUALITY: &str = "Quality assurance includes scanner calibration, stain normalization (for WSI), and protocol harmonization.";

pub(crate) const DEFAULT_AI_TASKS: [&str; 5] = [
    "detection",
    "segmentation",
    "grading",
    "risk stratification",
    "treatment response prediction",
];
pub(crate) const AI_PIPELINES: &str = "We will use reproducible pipelines (e.g., Nextflow/Snakemake), versioned datasets, and continuous evaluation across sites.";
pub(crate) const AI_FAIRNESS: &str = "Bias and fairness audits will quantify subgroup performance; corrective actions (reweighting, domain adaptation) will be documented.";

pub(crate) const CLINICAL_VALIDATION: [&str; 3] = [
    "Prospective and retrospective evaluations will be conducted with predefined endpoints (AUROC, calibration, time-to-diagnosis, workflow efficiency).",
    "Human factors studies will ensure usability for clinicians, lab technicians, and program officers.",
    "Deployment will follow a phased approach: sandbox \u{2192} limited release \u{2192} monitored scale-up with rollback mechanisms.",
];

pub(crate) const WORK_PACKAGES: [&str; 6] = [
    "WP1: Governance, standards, and ethics (policies, consent, security, interoperability)",
    "WP2: Data capture, QC, and curation across modalities and sites",
    "WP3: AI development and benchmarking with transparent reporting",
    "WP4: Clinical validation, health economics, and workflow integration",
    "WP5: Capacity building, community engagement, and dissemination",
    "WP6: Programme management, risk, and M&E (monitoring & evaluation)",
];

pub(crate) const DEFAULT_MILESTONES: [&str; 5] = [
    "M6: Network SOPs, ethics approvals, and pilot data flow operational",
    "M12: First multi-site curated dataset and baseline AI benchmarks",
    "M18: Prospective validation initiated at \u{2265}3 spokes",
    "M24: Interim impact readout and scale-up readiness review",
    "M36: Validated tools with deployment playbooks and handover plan",
];

pub(crate) const PROPOSED_DURATION_LEAD: &str = "**Proposed duration:**";
pub(crate) const DEFAULT_TIMELINE_YEARS: i64 = 3;

pub(crate) const DEFAULT_BUDGET: [&str; 4] = [
    "Capital: scanners, compute, secure storage, and networking",
    "Operational: personnel, maintenance, consumables, and training",
    "Software & Cloud: secure hosting, licenses, and observability",
    "Contingency and outreach: 5\u{2013}10% for risk, community engagement",
];

pub(crate) const DEFAULT_RISKS: [&str; 4] = [
    "Data heterogeneity \u{2013} SOP harmonization, calibration, and domain adaptation",
    "Ethics delays \u{2013} early engagement, template packages, rolling submissions",
    "Privacy concerns \u{2013} federated learning and strong de-identification",
    "Model drift \u{2013} continuous monitoring and scheduled revalidation",
];

pub(crate) const DEFAULT_EXPECTED_OUTCOMES: &str = "Validated AI tools for Indian care settings, reusable datasets and standards, capacity building across the network, and evidence for improved diagnostic pathways.";
pub(crate) const OUTCOMES_CLOSING: &str = "Outputs will be transferred with clear licensing, documentation, and operations playbooks to support sustainable adoption in national programmes.";

pub(crate) const PI_PLACEHOLDER: &str = "To be finalized";
pub(crate) const UNSET_PLACEHOLDER: &str = "\u{2014}";
pub(crate) const TEAM_MANAGEMENT: [&str; 2] = [
    "A central PMO will coordinate execution, reporting, and risk tracking with dashboards and monthly reviews.",
    "An independent Scientific and Ethics Advisory Board will provide oversight and course correction.",
];

pub(crate) const ANNEXES: [&str; 4] = [
    "SOP compendium and data dictionaries",
    "Model cards and validation reports",
    "Gantt chart and RACI matrix",
    "Letters of support and site readiness assessments",
];

pub(crate) const CONTACT_SEPARATOR: &str = " | ";
