//! Conversation store trait.

use super::key::ConversationKey;
use super::message::{Message, MessageDraft};
use crate::error::Result;
use async_trait::async_trait;

/// An abstract store owning the ordered message log of each conversation.
///
/// A conversation exists implicitly once it has at least one message; there
/// is no explicit create operation. Message order is creation order
/// (monotonic timestamps, ties broken by insertion sequence) and is never
/// reordered or deduplicated.
///
/// Implementations must serialize writes per key; reads may be snapshots.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Appends a message to the conversation and returns the stored value.
    ///
    /// Assigns `id` and `timestamp` when the draft leaves them unset, and
    /// always assigns the insertion sequence. Duplicate text is never
    /// rejected.
    async fn append(&self, key: &ConversationKey, draft: MessageDraft) -> Result<Message>;

    /// Returns the full message log of a conversation in append order.
    ///
    /// An unknown key yields an empty log, not an error.
    async fn history(&self, key: &ConversationKey) -> Result<Vec<Message>>;

    /// Removes all messages for the conversation.
    ///
    /// Destructive and idempotent; clearing an unknown key is a no-op.
    async fn clear(&self, key: &ConversationKey) -> Result<()>;
}
