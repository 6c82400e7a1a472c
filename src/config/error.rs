//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Export output directory must not be empty")]
    EmptyOutputDir,

    #[error("Fallback file stem must be non-empty and free of path separators: {0:?}")]
    InvalidFallbackStem(String),

    #[error("Unknown log level: {0}")]
    UnknownLogLevel(String),
}
