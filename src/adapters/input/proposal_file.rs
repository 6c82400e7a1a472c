//! Proposal file loader - Reads a `ProposalRecord` from YAML or JSON.
//!
//! The format is chosen from the file extension. Missing fields fall back to
//! their empty values, so a partially filled file is always accepted.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;
use tracing::debug;

use crate::domain::proposal::ProposalRecord;

/// Supported proposal file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Yaml,
    Json,
}

impl InputFormat {
    /// Detects the format from a path's extension (`.yaml`, `.yml`, `.json`).
    pub fn from_path(path: &Path) -> Result<Self, ProposalInputError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("yaml") | Some("yml") => Ok(InputFormat::Yaml),
            Some("json") => Ok(InputFormat::Json),
            _ => Err(ProposalInputError::UnsupportedExtension {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Errors raised while loading a proposal file.
#[derive(Debug, Error)]
pub enum ProposalInputError {
    #[error("Cannot read proposal file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported proposal file {path}: expected .yaml, .yml or .json")]
    UnsupportedExtension { path: PathBuf },

    #[error("Invalid YAML proposal: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON proposal: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses proposal text in the given format.
pub fn parse_proposal(text: &str, format: InputFormat) -> Result<ProposalRecord, ProposalInputError> {
    let record = match format {
        InputFormat::Yaml => serde_yaml::from_str(text)?,
        InputFormat::Json => serde_json::from_str(text)?,
    };
    Ok(record)
}

/// Reads and parses a proposal file.
pub async fn load_proposal(path: &Path) -> Result<ProposalRecord, ProposalInputError> {
    let format = InputFormat::from_path(path)?;
    let text = fs::read_to_string(path)
        .await
        .map_err(|source| ProposalInputError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let record = parse_proposal(&text, format)?;
    debug!(path = %path.display(), ?format, "Proposal loaded");
    Ok(record)
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
