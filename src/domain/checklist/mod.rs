//! Checklist Module - Pure scoring of a proposal's submission readiness.
//!
//! Stateless: takes the proposal record and the markdown generated from it and
//! returns a report. No ports or adapters involved.

mod readiness;

pub use readiness::{
    ChecklistItem, ChecklistResult, ChecklistScorer, ReadinessReport, AI_METHODOLOGY_ANCHOR,
    BUDGET_SUMMARY_ANCHOR, EXPECTED_OUTCOMES_ANCHOR, REQUIRED_ANCHORS, WORK_PACKAGES_ANCHOR,
};
