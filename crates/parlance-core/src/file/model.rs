//! Uploaded-file domain model.

use crate::domain::Domain;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Media types the assistant knows how to ingest.
///
/// Anything else is rejected at registration time with a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Pdf,
    Image,
    Audio,
    Video,
}

/// An uploaded-file record in the registry.
///
/// Immutable once registered, except for `domain` which can be changed via
/// retagging. The registry assigns `id` and `uploaded_at`; the orchestration
/// layer never mutates records directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Unique file identifier (UUID format)
    pub id: String,
    /// Original file name as uploaded
    pub name: String,
    /// Ingestion media type
    pub media_type: MediaType,
    /// File size in bytes
    pub size_bytes: u64,
    /// Knowledge domain this file is tagged with
    pub domain: Domain,
    /// Timestamp assigned by the registry at registration
    pub uploaded_at: DateTime<Utc>,
}

/// Input for registering a new file.
///
/// `media_type` is the raw client-supplied string; the registry parses and
/// validates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFile {
    pub name: String,
    pub media_type: String,
    pub size_bytes: u64,
    pub domain: Domain,
}

/// Filters to refine a file listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileFilter {
    /// Exact domain match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<Domain>,
    /// Case-insensitive substring match on the file name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl FileFilter {
    /// A filter that matches every file.
    pub fn all() -> Self {
        Self::default()
    }

    /// Restricts the listing to one domain.
    pub fn for_domain(domain: Domain) -> Self {
        Self {
            domain: Some(domain),
            query: None,
        }
    }

    /// Returns true when `file` passes every set criterion.
    pub fn matches(&self, file: &FileRecord) -> bool {
        if let Some(domain) = &self.domain {
            if &file.domain != domain {
                return false;
            }
        }
        if let Some(query) = &self.query {
            if !file.name.to_lowercase().contains(&query.to_lowercase()) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, domain: Domain) -> FileRecord {
        FileRecord {
            id: "f-1".to_string(),
            name: name.to_string(),
            media_type: MediaType::Pdf,
            size_bytes: 1024,
            domain,
            uploaded_at: Utc::now(),
        }
    }

    #[test]
    fn test_media_type_parsing() {
        assert_eq!("pdf".parse::<MediaType>().unwrap(), MediaType::Pdf);
        assert_eq!("Video".parse::<MediaType>().unwrap(), MediaType::Video);
        assert!("docx".parse::<MediaType>().is_err());
    }

    #[test]
    fn test_filter_domain_is_exact() {
        let file = record("Contract Agreement.pdf", Domain::Legal);
        assert!(FileFilter::for_domain(Domain::Legal).matches(&file));
        assert!(!FileFilter::for_domain(Domain::Medical).matches(&file));
    }

    #[test]
    fn test_filter_query_is_case_insensitive_substring() {
        let file = record("Annual Report 2023.pdf", Domain::Business);
        let filter = FileFilter {
            domain: None,
            query: Some("report".to_string()),
        };
        assert!(filter.matches(&file));

        let filter = FileFilter {
            domain: None,
            query: Some("invoice".to_string()),
        };
        assert!(!filter.matches(&file));
    }

    #[test]
    fn test_filter_criteria_combine() {
        let file = record("Medical Report.pdf", Domain::Medical);
        let filter = FileFilter {
            domain: Some(Domain::Medical),
            query: Some("REPORT".to_string()),
        };
        assert!(filter.matches(&file));

        let filter = FileFilter {
            domain: Some(Domain::Legal),
            query: Some("REPORT".to_string()),
        };
        assert!(!filter.matches(&file));
    }
}
