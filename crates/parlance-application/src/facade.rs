//! Session façade: the single entry point clients call.
//!
//! Composes the file registry, conversation store, and query dispatcher,
//! and guarantees the cross-component consistency rules: a file selection
//! maps to exactly one conversation key, queries on a file conversation run
//! under the file's *current* domain tag, and switching the active file
//! never mutates another conversation's log.

use crate::dispatcher::QueryDispatcher;
use parlance_core::config::OrchestratorConfig;
use parlance_core::conversation::{ConversationKey, ConversationStore, Message};
use parlance_core::domain::Domain;
use parlance_core::error::Result;
use parlance_core::file::{FileFilter, FileRecord, FileRegistry, NewFile};
use parlance_core::provider::AnswerProvider;
use parlance_core::query::{QueryOutcome, QueryPhase};
use std::sync::Arc;

/// Client-facing orchestration surface.
///
/// Web and mobile clients are thin consumers of this type: every mutation
/// goes through it, so all clients sharing the same underlying components
/// observe linearized per-conversation writes. Cheap to share via `Arc`.
pub struct SessionFacade {
    /// Owner of uploaded-file metadata
    registry: Arc<dyn FileRegistry>,
    /// Owner of the message logs
    store: Arc<dyn ConversationStore>,
    /// Owner of the query lifecycle
    dispatcher: QueryDispatcher,
}

impl SessionFacade {
    /// Creates a façade over the given components.
    pub fn new(
        registry: Arc<dyn FileRegistry>,
        store: Arc<dyn ConversationStore>,
        provider: Arc<dyn AnswerProvider>,
        config: OrchestratorConfig,
    ) -> Self {
        let dispatcher = QueryDispatcher::new(store.clone(), provider, config);
        Self {
            registry,
            store,
            dispatcher,
        }
    }

    /// Registers an uploaded file and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error for an unsupported media type or a
    /// zero-byte size.
    pub async fn upload_file(
        &self,
        name: &str,
        media_type: &str,
        size_bytes: u64,
        domain: Domain,
    ) -> Result<FileRecord> {
        self.registry
            .register(NewFile {
                name: name.to_string(),
                media_type: media_type.to_string(),
                size_bytes,
                domain,
            })
            .await
    }

    /// Maps a file selection to its conversation key.
    ///
    /// Selection is a pure read: it validates that the file exists and
    /// never touches any conversation log, so switching files while another
    /// conversation has a pending query leaves that query untouched.
    ///
    /// # Errors
    ///
    /// Returns a `NotFound` error for an unknown file id.
    pub async fn select_file(&self, file_id: &str) -> Result<ConversationKey> {
        let file = self.registry.get(file_id).await?;
        tracing::debug!(target: "session_facade", "Selected file {} ('{}')", file.id, file.name);
        Ok(ConversationKey::file(file.id))
    }

    /// Key of the open-search conversation for a domain.
    pub fn open_search(&self, domain: Domain) -> ConversationKey {
        ConversationKey::open_search(domain)
    }

    /// Submits a query on a conversation.
    ///
    /// File conversations resolve the file's current domain tag and hand
    /// the file to the provider; open-search conversations use the key's
    /// domain and no file.
    pub async fn submit_query(&self, key: &ConversationKey, text: &str) -> Result<QueryOutcome> {
        match key {
            ConversationKey::File { file_id } => {
                let file = self.registry.get(file_id).await?;
                let domain = file.domain.clone();
                self.dispatcher.submit(key, domain, text, Some(file)).await
            }
            ConversationKey::OpenSearch { domain } => {
                self.dispatcher.submit(key, domain.clone(), text, None).await
            }
        }
    }

    /// Cancels the pending query of a conversation, if any.
    pub async fn cancel_query(&self, key: &ConversationKey) -> bool {
        self.dispatcher.cancel(key).await
    }

    /// Steady lifecycle state of a conversation.
    pub async fn query_phase(&self, key: &ConversationKey) -> QueryPhase {
        self.dispatcher.phase(key).await
    }

    /// Full message log of a conversation in append order.
    pub async fn get_history(&self, key: &ConversationKey) -> Result<Vec<Message>> {
        self.store.history(key).await
    }

    /// Removes all messages of a conversation (single-thread UI support).
    pub async fn clear_conversation(&self, key: &ConversationKey) -> Result<()> {
        self.store.clear(key).await
    }

    /// Lists files matching the filter, newest upload first.
    pub async fn list_files(&self, filter: &FileFilter) -> Result<Vec<FileRecord>> {
        self.registry.list(filter).await
    }

    /// Changes the domain tag of a file; subsequent queries on its
    /// conversation run under the new domain.
    pub async fn retag_file(&self, file_id: &str, domain: Domain) -> Result<FileRecord> {
        let record = self.registry.retag(file_id, domain).await?;
        tracing::info!(
            target: "session_facade",
            "Retagged file {} to domain {}",
            record.id,
            record.domain
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlance_core::conversation::Sender;
    use parlance_infrastructure::{InMemoryConversationStore, InMemoryFileRegistry};
    use parlance_interaction::CannedProvider;
    use std::time::Duration;

    fn facade() -> SessionFacade {
        SessionFacade::new(
            Arc::new(InMemoryFileRegistry::new()),
            Arc::new(InMemoryConversationStore::new()),
            Arc::new(CannedProvider::new().with_delay(Duration::ZERO)),
            OrchestratorConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_upload_select_submit_round_trip() {
        let facade = facade();

        let file = facade
            .upload_file("Contract Agreement.pdf", "pdf", 1_800_000, Domain::Legal)
            .await
            .unwrap();
        let key = facade.select_file(&file.id).await.unwrap();

        let outcome = facade
            .submit_query(&key, "What are the termination clauses?")
            .await
            .unwrap();
        assert!(outcome.message().is_some());

        let history = facade.get_history(&key).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].sender, Sender::User);
        assert_eq!(history[0].domain, Domain::Legal);
        assert_eq!(history[1].sender, Sender::Assistant);
        assert_eq!(facade.query_phase(&key).await, QueryPhase::Idle);
        // Nothing left in flight to cancel.
        assert!(!facade.cancel_query(&key).await);
    }

    #[tokio::test]
    async fn test_select_unknown_file_is_not_found() {
        let facade = facade();
        let err = facade.select_file("missing").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_upload_rejects_unsupported_media_type() {
        let facade = facade();
        let err = facade
            .upload_file("notes.docx", "docx", 1024, Domain::General)
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_open_search_answers_carry_the_domain() {
        let facade = facade();
        let key = facade.open_search(Domain::Medical);

        facade
            .submit_query(&key, "What causes migraines?")
            .await
            .unwrap();

        let history = facade.get_history(&key).await.unwrap();
        assert!(history[1].text.contains("medical domain question"));
    }

    #[tokio::test]
    async fn test_retag_changes_the_query_domain() {
        let facade = facade();
        let file = facade
            .upload_file("Research Paper.pdf", "pdf", 2_700_000, Domain::General)
            .await
            .unwrap();
        let key = facade.select_file(&file.id).await.unwrap();

        facade.retag_file(&file.id, Domain::Academic).await.unwrap();
        facade.submit_query(&key, "Summarize the abstract").await.unwrap();

        let history = facade.get_history(&key).await.unwrap();
        assert_eq!(history[0].domain, Domain::Academic);
    }

    #[tokio::test]
    async fn test_clear_conversation_leaves_other_logs_alone() {
        let facade = facade();
        let file_a = facade
            .upload_file("a.pdf", "pdf", 1024, Domain::General)
            .await
            .unwrap();
        let file_b = facade
            .upload_file("b.pdf", "pdf", 1024, Domain::General)
            .await
            .unwrap();
        let key_a = facade.select_file(&file_a.id).await.unwrap();
        let key_b = facade.select_file(&file_b.id).await.unwrap();

        facade.submit_query(&key_a, "about a").await.unwrap();
        facade.submit_query(&key_b, "about b").await.unwrap();

        facade.clear_conversation(&key_a).await.unwrap();
        assert!(facade.get_history(&key_a).await.unwrap().is_empty());
        assert_eq!(facade.get_history(&key_b).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_list_files_filters_by_domain() {
        let facade = facade();
        facade
            .upload_file("contract.pdf", "pdf", 1024, Domain::Legal)
            .await
            .unwrap();
        facade
            .upload_file("diagram.png", "image", 2048, Domain::General)
            .await
            .unwrap();

        let legal = facade
            .list_files(&FileFilter::for_domain(Domain::Legal))
            .await
            .unwrap();
        assert_eq!(legal.len(), 1);
        assert_eq!(legal[0].name, "contract.pdf");
    }
}
