//! Generation defaults

use serde::Deserialize;

use crate::ports::{Depth, GenerationOptions, Tone};

/// Default generation options, overridable per command.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    /// Prose tone
    #[serde(default)]
    pub tone: Tone,

    /// Requested depth
    #[serde(default)]
    pub depth: Depth,

    /// Include the data-sovereignty sentence
    #[serde(default = "default_include_india_context")]
    pub include_india_context: bool,
}

impl GenerationConfig {
    /// Options to start from before applying command-line overrides.
    pub fn options(&self) -> GenerationOptions {
        GenerationOptions {
            tone: self.tone,
            depth: self.depth,
            include_india_context: self.include_india_context,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            tone: Tone::default(),
            depth: Depth::default(),
            include_india_context: default_include_india_context(),
        }
    }
}

fn default_include_india_context() -> bool {
    true
}
