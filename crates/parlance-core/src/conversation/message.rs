//! Conversation message types.

use super::key::ConversationKey;
use crate::domain::Domain;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents the side that produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// Message typed by the user.
    User,
    /// Message produced by the answer provider.
    Assistant,
}

/// A single message in a conversation log.
///
/// Immutable once stored. A user message and its resulting assistant message
/// form a logical exchange but are stored as two independent entries; the
/// user half is appended before the provider is ever invoked, so it survives
/// provider failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Unique message identifier (UUID format)
    pub id: String,
    /// The conversation this message belongs to
    pub conversation: ConversationKey,
    /// Who produced the message
    pub sender: Sender,
    /// The message text
    pub text: String,
    /// Knowledge domain the message was submitted under
    pub domain: Domain,
    /// Creation timestamp
    pub timestamp: DateTime<Utc>,
    /// Store-assigned insertion counter; breaks timestamp ties so log order
    /// is always creation order
    pub seq: u64,
}

/// What callers hand to [`ConversationStore::append`]; the store assigns
/// `id`, `timestamp` (when absent) and `seq`.
///
/// [`ConversationStore::append`]: super::store::ConversationStore::append
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDraft {
    pub sender: Sender,
    pub text: String,
    pub domain: Domain,
    /// Caller-supplied id; assigned by the store when `None`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Caller-supplied timestamp; assigned by the store when `None`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl MessageDraft {
    /// Draft for a user-authored message.
    pub fn user(text: impl Into<String>, domain: Domain) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            domain,
            id: None,
            timestamp: None,
        }
    }

    /// Draft for an assistant answer.
    pub fn assistant(text: impl Into<String>, domain: Domain) -> Self {
        Self {
            sender: Sender::Assistant,
            text: text.into(),
            domain,
            id: None,
            timestamp: None,
        }
    }

    /// Pins the message id instead of letting the store assign one.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Pins the timestamp instead of letting the store assign one.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}
