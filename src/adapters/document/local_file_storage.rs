//! Local Filesystem Storage Adapter - Implementation of ExportFileStorage.
//!
//! Writes exported proposals into a single output directory.
//! Uses atomic writes and SHA-256 checksums for data integrity.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::ports::{ExportFileStorage, StorageError, StoredExport};

/// Local filesystem storage for exported documents.
///
/// # Atomic Writes
///
/// Uses a write-to-temp-then-rename pattern:
/// 1. Write content to `.{file_name}.tmp`
/// 2. Sync to disk
/// 3. Rename to `{file_name}`
///
/// A crash mid-write leaves at most a stray temp file, never a truncated export.
///
/// # Usage
///
/// ```rust,ignore
/// let storage = LocalExportFileStorage::new("exports");
///
/// let stored = storage.write("My_Grant.docx", &bytes).await?;
/// println!("Size: {} bytes, Checksum: {}", stored.size_bytes, stored.checksum);
/// ```
#[derive(Debug, Clone)]
pub struct LocalExportFileStorage {
    /// Output directory for exported files.
    base_path: PathBuf,
}

impl LocalExportFileStorage {
    /// Creates a new local file storage writing into `base_path`.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Returns the full path for a file, rejecting names with path components.
    fn file_path(&self, file_name: &str) -> Result<PathBuf, StorageError> {
        validate_file_name(file_name)?;
        Ok(self.base_path.join(file_name))
    }

    /// Returns the temporary file path for atomic writes.
    fn temp_path(&self, file_name: &str) -> PathBuf {
        self.base_path.join(format!(".{}.tmp", file_name))
    }

    /// Ensures the output directory exists.
    async fn ensure_base_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_path).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to create output directory {}: {}",
                self.base_path.display(),
                e
            ))
        })
    }

    /// Computes SHA-256 checksum of the given content.
    fn compute_checksum(content: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content);
        hex::encode(hasher.finalize())
    }
}

/// A file name must be a single, non-empty path component.
fn validate_file_name(file_name: &str) -> Result<(), StorageError> {
    let invalid = file_name.trim().is_empty()
        || file_name.contains('/')
        || file_name.contains('\\')
        || file_name == "."
        || file_name == "..";
    if invalid {
        return Err(StorageError::invalid_file_name(file_name));
    }
    Ok(())
}

#[async_trait]
impl ExportFileStorage for LocalExportFileStorage {
    async fn write(&self, file_name: &str, content: &[u8]) -> Result<StoredExport, StorageError> {
        let final_path = self.file_path(file_name)?;
        self.ensure_base_dir().await?;

        let temp_path = self.temp_path(file_name);

        let mut file = fs::File::create(&temp_path).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to create temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.write_all(content).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to write to temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::io(format!(
                "Failed to sync temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        fs::rename(&temp_path, &final_path).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                final_path.display(),
                e
            ))
        })?;

        let stored = StoredExport::new(
            final_path,
            content.len() as u64,
            Self::compute_checksum(content),
        );
        debug!(
            path = %stored.path.display(),
            size_bytes = stored.size_bytes,
            "Export written"
        );
        Ok(stored)
    }

    async fn read(&self, file_name: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.file_path(file_name)?;
        match fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::not_found(path.display().to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn exists(&self, file_name: &str) -> Result<bool, StorageError> {
        let path = self.file_path(file_name)?;
        Ok(fs::try_exists(&path).await?)
    }

    fn base_path(&self) -> &Path {
        &self.base_path
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
