//! Conversation keys.

use crate::domain::Domain;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier selecting which message log a query belongs to.
///
/// Every uploaded file has its own conversation; additionally there is one
/// open-search conversation per domain for questions not bound to a file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ConversationKey {
    /// Chat about one uploaded file.
    File { file_id: String },
    /// Open search within a knowledge domain.
    OpenSearch { domain: Domain },
}

impl ConversationKey {
    /// Key for the conversation attached to a file.
    pub fn file(file_id: impl Into<String>) -> Self {
        Self::File {
            file_id: file_id.into(),
        }
    }

    /// Key for the open-search conversation of a domain.
    pub fn open_search(domain: Domain) -> Self {
        Self::OpenSearch { domain }
    }
}

impl fmt::Display for ConversationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File { file_id } => write!(f, "file:{}", file_id),
            Self::OpenSearch { domain } => write!(f, "search:{}", domain),
        }
    }
}
