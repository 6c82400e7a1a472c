//! Value objects for generated documents.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

// ════════════════════════════════════════════════════════════════════════════════
// MarkdownContent - Generated document with integrity checking
// ════════════════════════════════════════════════════════════════════════════════

/// Generated markdown with a checksum for reproducibility checks.
///
/// Two generations from the same record and options carry the same checksum,
/// so exports can be compared without diffing the text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkdownContent {
    raw: String,
    checksum: String,
}

impl MarkdownContent {
    /// Creates a new MarkdownContent, computing the checksum.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let checksum = Self::compute_checksum(&raw);
        Self { raw, checksum }
    }

    /// Computes SHA-256 checksum of content.
    pub fn compute_checksum(content: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Returns the raw markdown content.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the content checksum.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    /// Returns the content size in bytes.
    pub fn size_bytes(&self) -> usize {
        self.raw.len()
    }
}

impl Default for MarkdownContent {
    fn default() -> Self {
        Self::new("")
    }
}

impl PartialEq for MarkdownContent {
    fn eq(&self, other: &Self) -> bool {
        self.checksum == other.checksum
    }
}

impl Eq for MarkdownContent {}

impl AsRef<str> for MarkdownContent {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}
