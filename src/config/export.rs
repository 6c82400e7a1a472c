//! Export configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::ports::FALLBACK_FILE_STEM;

/// Export configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Directory exported files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Embed the default stylesheet in HTML output
    #[serde(default = "default_include_default_css")]
    pub include_default_css: bool,

    /// Filename stem for proposals without a title
    #[serde(default = "default_fallback_stem")]
    pub fallback_stem: String,
}

impl ExportConfig {
    /// Validate export configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(ValidationError::EmptyOutputDir);
        }
        let stem = self.fallback_stem.trim();
        if stem.is_empty() || stem.contains('/') || stem.contains('\\') {
            return Err(ValidationError::InvalidFallbackStem(
                self.fallback_stem.clone(),
            ));
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            include_default_css: default_include_default_css(),
            fallback_stem: default_fallback_stem(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("exports")
}

fn default_include_default_css() -> bool {
    true
}

fn default_fallback_stem() -> String {
    FALLBACK_FILE_STEM.to_string()
}
