//! In-memory file registry.

use async_trait::async_trait;
use chrono::Utc;
use parlance_core::domain::Domain;
use parlance_core::error::{ParlanceError, Result};
use parlance_core::file::{FileFilter, FileRecord, FileRegistry, MediaType, NewFile};
use tokio::sync::RwLock;
use uuid::Uuid;

/// `FileRegistry` backed by a process-local vector.
///
/// Records are kept in registration order; listing sorts by upload time
/// descending with ties breaking toward the most recent registration.
#[derive(Default)]
pub struct InMemoryFileRegistry {
    files: RwLock<Vec<FileRecord>>,
}

impl InMemoryFileRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FileRegistry for InMemoryFileRegistry {
    async fn register(&self, new_file: NewFile) -> Result<FileRecord> {
        let media_type: MediaType = new_file.media_type.parse().map_err(|_| {
            ParlanceError::validation(format!("unsupported media type '{}'", new_file.media_type))
        })?;
        if new_file.size_bytes == 0 {
            return Err(ParlanceError::validation("file size must be positive"));
        }

        let record = FileRecord {
            id: Uuid::new_v4().to_string(),
            name: new_file.name,
            media_type,
            size_bytes: new_file.size_bytes,
            domain: new_file.domain,
            uploaded_at: Utc::now(),
        };

        let mut files = self.files.write().await;
        files.push(record.clone());

        tracing::info!(
            target: "file_registry",
            "Registered {} file '{}' ({} bytes, domain {})",
            record.media_type,
            record.name,
            record.size_bytes,
            record.domain
        );

        Ok(record)
    }

    async fn retag(&self, file_id: &str, domain: Domain) -> Result<FileRecord> {
        let mut files = self.files.write().await;
        let record = files
            .iter_mut()
            .find(|f| f.id == file_id)
            .ok_or_else(|| ParlanceError::not_found("file", file_id))?;

        record.domain = domain;
        Ok(record.clone())
    }

    async fn get(&self, file_id: &str) -> Result<FileRecord> {
        let files = self.files.read().await;
        files
            .iter()
            .find(|f| f.id == file_id)
            .cloned()
            .ok_or_else(|| ParlanceError::not_found("file", file_id))
    }

    async fn list(&self, filter: &FileFilter) -> Result<Vec<FileRecord>> {
        let files = self.files.read().await;

        // Reverse first so a stable sort keeps latest-registered first on
        // upload-time ties.
        let mut matching: Vec<FileRecord> = files
            .iter()
            .rev()
            .filter(|f| filter.matches(f))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));

        Ok(matching)
    }
}
