//! Export File Storage Port - Filesystem operations interface.
//!
//! This port defines the contract for writing exported documents to disk.
//! Handlers depend on this trait, while adapters (like LocalExportFileStorage)
//! provide the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Port for writing exported documents.
///
/// # Contract
///
/// Implementations must:
/// - Create the output directory if it doesn't exist
/// - Write atomically (no partial content on failure)
/// - Compute SHA-256 checksums of the written bytes
/// - Refuse file names that would escape the output directory
///
/// # Usage
///
/// ```rust,ignore
/// let storage: &dyn ExportFileStorage = get_storage();
///
/// let stored = storage.write(&exported.filename, &exported.content).await?;
/// println!("wrote {} ({} bytes)", stored.path.display(), stored.size_bytes);
/// ```
#[async_trait]
pub trait ExportFileStorage: Send + Sync {
    /// Write `content` under `file_name` in the output directory.
    async fn write(&self, file_name: &str, content: &[u8]) -> Result<StoredExport, StorageError>;

    /// Read back a previously written file.
    async fn read(&self, file_name: &str) -> Result<Vec<u8>, StorageError>;

    /// Check whether a file exists in the output directory.
    async fn exists(&self, file_name: &str) -> Result<bool, StorageError>;

    /// The output directory.
    fn base_path(&self) -> &Path;
}

/// Result of a completed write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredExport {
    /// Final path of the written file.
    pub path: PathBuf,

    /// File size in bytes.
    pub size_bytes: u64,

    /// Hex-encoded SHA-256 checksum of the content.
    pub checksum: String,

    /// When the write completed.
    pub written_at: DateTime<Utc>,
}

impl StoredExport {
    pub fn new(path: impl Into<PathBuf>, size_bytes: u64, checksum: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            size_bytes,
            checksum: checksum.into(),
            written_at: Utc::now(),
        }
    }
}

/// Errors that can occur during file storage operations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// File was not found.
    #[error("File not found: {path}")]
    NotFound { path: String },

    /// Permission denied accessing the file.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    /// IO error during file operation.
    #[error("IO error: {message}")]
    Io { message: String },

    /// File name is empty or contains path components.
    #[error("Invalid file name: {file_name}")]
    InvalidFileName { file_name: String },
}

impl StorageError {
    /// Creates a not found error.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Creates a permission denied error.
    pub fn permission_denied(path: impl Into<String>) -> Self {
        Self::PermissionDenied { path: path.into() }
    }

    /// Creates an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates an invalid file name error.
    pub fn invalid_file_name(file_name: impl Into<String>) -> Self {
        Self::InvalidFileName {
            file_name: file_name.into(),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => StorageError::not_found(err.to_string()),
            std::io::ErrorKind::PermissionDenied => {
                StorageError::permission_denied(err.to_string())
            }
            _ => StorageError::io(err.to_string()),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
