//! File registry trait.
//!
//! Defines the interface for uploaded-file bookkeeping, decoupling the
//! orchestration layer from the specific storage mechanism (in-memory map,
//! database, remote service).

use super::model::{FileFilter, FileRecord, NewFile};
use crate::domain::Domain;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract registry owning uploaded-file metadata.
///
/// The registry is the only component allowed to mutate file records.
/// Implementations must serialize writes per file id; reads may be
/// lock-free snapshots.
#[async_trait]
pub trait FileRegistry: Send + Sync {
    /// Registers a newly uploaded file and returns the stored record.
    ///
    /// The registry assigns the id and upload timestamp.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error if the media type string is not one of
    /// the supported types, or if `size_bytes` is zero.
    async fn register(&self, new_file: NewFile) -> Result<FileRecord>;

    /// Changes the domain tag of an existing file.
    ///
    /// # Errors
    ///
    /// Returns a `NotFound` error if no file has the given id.
    async fn retag(&self, file_id: &str, domain: Domain) -> Result<FileRecord>;

    /// Looks up a single file by id.
    ///
    /// # Errors
    ///
    /// Returns a `NotFound` error if no file has the given id.
    async fn get(&self, file_id: &str) -> Result<FileRecord>;

    /// Lists files matching the filter, ordered by upload time descending.
    ///
    /// Ties in upload time break toward the most recent registration.
    /// Listing is a pure read and never fails on an empty registry.
    async fn list(&self, filter: &FileFilter) -> Result<Vec<FileRecord>>;
}
