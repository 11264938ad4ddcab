//! In-memory conversation store.

use async_trait::async_trait;
use chrono::Utc;
use parlance_core::conversation::{ConversationKey, ConversationStore, Message, MessageDraft};
use parlance_core::error::Result;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct StoreInner {
    conversations: HashMap<ConversationKey, Vec<Message>>,
    next_seq: u64,
}

/// `ConversationStore` backed by a process-local map.
///
/// Writes to one key are serialized by the lock; reads return cloned
/// snapshots. The insertion sequence is global across conversations and
/// assigned under the same lock as the append, which keeps per-conversation
/// order strictly monotonic.
#[derive(Default)]
pub struct InMemoryConversationStore {
    inner: RwLock<StoreInner>,
}

impl InMemoryConversationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn append(&self, key: &ConversationKey, draft: MessageDraft) -> Result<Message> {
        // seq is taken under the write lock so it always agrees with the
        // push order, even for concurrent appends to the same key.
        let mut inner = self.inner.write().await;
        let seq = inner.next_seq;
        inner.next_seq += 1;

        let message = Message {
            id: draft.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            conversation: key.clone(),
            sender: draft.sender,
            text: draft.text,
            domain: draft.domain,
            timestamp: draft.timestamp.unwrap_or_else(Utc::now),
            seq,
        };

        inner
            .conversations
            .entry(key.clone())
            .or_default()
            .push(message.clone());

        tracing::debug!(
            target: "conversation_store",
            "Appended {:?} message {} to {}",
            message.sender,
            message.id,
            key
        );

        Ok(message)
    }

    async fn history(&self, key: &ConversationKey) -> Result<Vec<Message>> {
        let inner = self.inner.read().await;
        Ok(inner.conversations.get(key).cloned().unwrap_or_default())
    }

    async fn clear(&self, key: &ConversationKey) -> Result<()> {
        let mut inner = self.inner.write().await;
        if inner.conversations.remove(key).is_some() {
            tracing::debug!(target: "conversation_store", "Cleared conversation {}", key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlance_core::domain::Domain;

    #[tokio::test]
    async fn test_append_assigns_id_timestamp_and_seq() {
        let store = InMemoryConversationStore::new();
        let key = ConversationKey::file("1");

        let stored = store
            .append(&key, MessageDraft::user("What is X?", Domain::Legal))
            .await
            .unwrap();

        assert!(!stored.id.is_empty());
        assert_eq!(stored.conversation, key);
        assert_eq!(stored.text, "What is X?");
    }

    #[tokio::test]
    async fn test_caller_supplied_id_and_timestamp_are_kept() {
        let store = InMemoryConversationStore::new();
        let key = ConversationKey::file("1");
        let pinned = Utc::now();

        let stored = store
            .append(
                &key,
                MessageDraft::user("hello", Domain::General)
                    .with_id("101")
                    .with_timestamp(pinned),
            )
            .await
            .unwrap();

        assert_eq!(stored.id, "101");
        assert_eq!(stored.timestamp, pinned);
    }

    #[tokio::test]
    async fn test_history_preserves_append_order() {
        let store = InMemoryConversationStore::new();
        let key = ConversationKey::open_search(Domain::General);

        for i in 0..10 {
            store
                .append(&key, MessageDraft::user(format!("q{}", i), Domain::General))
                .await
                .unwrap();
        }

        let history = store.history(&key).await.unwrap();
        assert_eq!(history.len(), 10);
        for (i, message) in history.iter().enumerate() {
            assert_eq!(message.text, format!("q{}", i));
        }
        // Sequence numbers are strictly increasing even when timestamps tie.
        for pair in history.windows(2) {
            assert!(pair[0].seq < pair[1].seq);
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends_keep_log_and_seq_in_agreement() {
        let store = std::sync::Arc::new(InMemoryConversationStore::new());
        let key = ConversationKey::file("1");

        let mut tasks = Vec::new();
        for i in 0..32 {
            let store = store.clone();
            let key = key.clone();
            tasks.push(tokio::spawn(async move {
                store
                    .append(&key, MessageDraft::user(format!("m{}", i), Domain::General))
                    .await
                    .unwrap();
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        let history = store.history(&key).await.unwrap();
        assert_eq!(history.len(), 32);
        for pair in history.windows(2) {
            assert!(pair[0].seq < pair[1].seq);
        }
    }

    #[tokio::test]
    async fn test_duplicate_text_is_accepted() {
        let store = InMemoryConversationStore::new();
        let key = ConversationKey::file("1");

        store
            .append(&key, MessageDraft::user("same", Domain::General))
            .await
            .unwrap();
        store
            .append(&key, MessageDraft::user("same", Domain::General))
            .await
            .unwrap();

        assert_eq!(store.history(&key).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_key_yields_empty_history() {
        let store = InMemoryConversationStore::new();
        let history = store.history(&ConversationKey::file("nope")).await.unwrap();
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn test_clear_is_idempotent_and_scoped() {
        let store = InMemoryConversationStore::new();
        let key_a = ConversationKey::file("a");
        let key_b = ConversationKey::file("b");

        store
            .append(&key_a, MessageDraft::user("in a", Domain::General))
            .await
            .unwrap();
        store
            .append(&key_b, MessageDraft::user("in b", Domain::General))
            .await
            .unwrap();

        store.clear(&key_a).await.unwrap();
        store.clear(&key_a).await.unwrap();

        assert!(store.history(&key_a).await.unwrap().is_empty());
        assert_eq!(store.history(&key_b).await.unwrap().len(), 1);
    }
}
