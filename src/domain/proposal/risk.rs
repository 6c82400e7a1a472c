//! Programme risks and their mitigations.

use serde::{Deserialize, Serialize};

/// Separator between risk and mitigation in a one-line entry.
pub const RISK_ENTRY_SEPARATOR: char = '–';

/// Mitigation used when a one-line entry names only the risk.
pub const DEFAULT_MITIGATION: &str = "Mitigate via SOPs and monitoring";

/// A risk and how the programme will mitigate it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RiskItem {
    pub risk: String,
    pub mitigation: String,
}

impl RiskItem {
    pub fn new(risk: impl Into<String>, mitigation: impl Into<String>) -> Self {
        Self {
            risk: risk.into(),
            mitigation: mitigation.into(),
        }
    }

    /// Parses a one-line `Risk – Mitigation` entry.
    ///
    /// Everything before the first en dash is the risk; the remainder is the
    /// mitigation. A missing or blank mitigation falls back to
    /// [`DEFAULT_MITIGATION`]; a blank risk keeps the whole entry.
    pub fn from_entry(entry: &str) -> Self {
        let mut parts = entry.split(RISK_ENTRY_SEPARATOR);
        let risk = parts.next().unwrap_or_default().trim();
        let rest = parts.collect::<Vec<_>>().join(&RISK_ENTRY_SEPARATOR.to_string());
        let mitigation = rest.trim();

        Self {
            risk: if risk.is_empty() {
                entry.to_string()
            } else {
                risk.to_string()
            },
            mitigation: if mitigation.is_empty() {
                DEFAULT_MITIGATION.to_string()
            } else {
                mitigation.to_string()
            },
        }
    }
}
