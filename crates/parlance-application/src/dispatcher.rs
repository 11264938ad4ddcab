//! Query dispatcher: the per-conversation lifecycle state machine.
//!
//! Accepts a user query bound to a conversation, appends the user message
//! synchronously, invokes the answer provider under a timeout, and appends
//! the assistant message only when the attempt is still current. At most
//! one query is in flight per conversation; different conversations run
//! fully in parallel.

use parlance_core::config::OrchestratorConfig;
use parlance_core::conversation::{ConversationKey, ConversationStore, MessageDraft};
use parlance_core::domain::Domain;
use parlance_core::error::{ParlanceError, Result};
use parlance_core::file::FileRecord;
use parlance_core::provider::{AnswerProvider, AnswerRequest};
use parlance_core::query::{QueryOutcome, QueryPhase, RequestId};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Lifecycle state of one conversation.
///
/// `request_id` identifies the attempt that set the current phase; a
/// response is applied only while the phase is still `Pending` *and* the
/// ids match, so cancellation and resubmission both invalidate in-flight
/// responses without touching shared state mid-flight.
#[derive(Default)]
struct ConversationState {
    phase: QueryPhase,
    request_id: RequestId,
}

/// Dispatches queries through the `Idle -> Pending -> {answered, failed} ->
/// Idle` lifecycle.
pub struct QueryDispatcher {
    /// Message log owner; the dispatcher appends, never rewrites
    store: Arc<dyn ConversationStore>,
    /// External answer collaborator
    provider: Arc<dyn AnswerProvider>,
    /// Per-conversation lifecycle gate
    states: RwLock<HashMap<ConversationKey, ConversationState>>,
    /// Monotonic attempt counter shared across conversations
    next_request_id: AtomicU64,
    config: OrchestratorConfig,
}

impl QueryDispatcher {
    /// Creates a dispatcher over the given store and provider.
    pub fn new(
        store: Arc<dyn ConversationStore>,
        provider: Arc<dyn AnswerProvider>,
        config: OrchestratorConfig,
    ) -> Self {
        Self {
            store,
            provider,
            states: RwLock::new(HashMap::new()),
            next_request_id: AtomicU64::new(1),
            config,
        }
    }

    /// Submits a query using the configured answer timeout.
    ///
    /// See [`submit_with_timeout`](Self::submit_with_timeout).
    pub async fn submit(
        &self,
        key: &ConversationKey,
        domain: Domain,
        text: &str,
        file: Option<FileRecord>,
    ) -> Result<QueryOutcome> {
        self.submit_with_timeout(key, domain, text, file, self.config.answer_timeout())
            .await
    }

    /// Submits a query with a caller-supplied timeout.
    ///
    /// The user message is appended before the provider is invoked, so it
    /// is never lost even when the provider call fails.
    ///
    /// # Errors
    ///
    /// - `Validation`: `text` is empty after trimming
    /// - `ConcurrentQuery`: the conversation already has a pending query
    /// - `Provider` / `Timeout`: the attempt failed; the user message stays
    ///   in the log and the lifecycle returns to idle
    pub async fn submit_with_timeout(
        &self,
        key: &ConversationKey,
        domain: Domain,
        text: &str,
        file: Option<FileRecord>,
        timeout: Duration,
    ) -> Result<QueryOutcome> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ParlanceError::validation("query text must not be empty"));
        }

        // Reserve the conversation before touching the log so two submits
        // racing on the same key cannot both pass the gate.
        let request_id = {
            let mut states = self.states.write().await;
            let state = states.entry(key.clone()).or_default();
            if state.phase == QueryPhase::Pending {
                return Err(ParlanceError::concurrent_query(key));
            }
            let request_id = RequestId(self.next_request_id.fetch_add(1, Ordering::SeqCst));
            state.phase = QueryPhase::Pending;
            state.request_id = request_id;
            request_id
        };

        if let Err(err) = self
            .store
            .append(key, MessageDraft::user(trimmed, domain.clone()))
            .await
        {
            self.release_if_current(key, request_id).await;
            return Err(err);
        }

        tracing::info!(
            target: "query_dispatch",
            "{} submitted on {} (domain {})",
            request_id,
            key,
            domain
        );

        let request = AnswerRequest {
            query: trimmed.to_string(),
            domain: domain.clone(),
            file,
        };

        // The only suspending operation. No lock is held here, so other
        // conversations proceed while this one waits.
        let started = Instant::now();
        match tokio::time::timeout(timeout, self.provider.answer(&request)).await {
            Ok(Ok(answer)) => self.resolve(key, request_id, answer, domain).await,
            Ok(Err(err)) => self.fail(key, request_id, err.into()).await,
            Err(_) => {
                self.fail(key, request_id, ParlanceError::timeout(started.elapsed()))
                    .await
            }
        }
    }

    /// Cancels the pending query of a conversation, if any.
    ///
    /// Returns true when a pending query was cancelled. The abandoned
    /// in-flight provider call resolves as stale and its result is
    /// discarded; idempotent on idle conversations.
    pub async fn cancel(&self, key: &ConversationKey) -> bool {
        let mut states = self.states.write().await;
        match states.get_mut(key) {
            Some(state) if state.phase == QueryPhase::Pending => {
                state.phase = QueryPhase::Idle;
                tracing::info!(target: "query_dispatch", "Cancelled pending query on {}", key);
                true
            }
            _ => false,
        }
    }

    /// Current steady lifecycle state of a conversation.
    pub async fn phase(&self, key: &ConversationKey) -> QueryPhase {
        let states = self.states.read().await;
        states.get(key).map(|s| s.phase).unwrap_or_default()
    }

    /// Applies a successful provider response, unless the attempt went
    /// stale while in flight.
    async fn resolve(
        &self,
        key: &ConversationKey,
        request_id: RequestId,
        answer: String,
        domain: Domain,
    ) -> Result<QueryOutcome> {
        // Append while holding the gate so a cancel or resubmit cannot
        // interleave between the staleness check and the append.
        let mut states = self.states.write().await;
        if !Self::is_current(&states, key, request_id) {
            tracing::debug!(
                target: "query_dispatch",
                "{} on {} resolved after being superseded; answer discarded",
                request_id,
                key
            );
            return Ok(QueryOutcome::Superseded);
        }

        let appended = self
            .store
            .append(key, MessageDraft::assistant(answer, domain))
            .await;
        if let Some(state) = states.get_mut(key) {
            state.phase = QueryPhase::Idle;
        }

        let message = appended?;
        tracing::info!(target: "query_dispatch", "{} answered on {}", request_id, key);
        Ok(QueryOutcome::Answered(message))
    }

    /// Surfaces a failed attempt to its caller, unless it went stale.
    async fn fail(
        &self,
        key: &ConversationKey,
        request_id: RequestId,
        err: ParlanceError,
    ) -> Result<QueryOutcome> {
        let mut states = self.states.write().await;
        if !Self::is_current(&states, key, request_id) {
            tracing::debug!(
                target: "query_dispatch",
                "{} on {} failed after being superseded: {}",
                request_id,
                key,
                err
            );
            return Ok(QueryOutcome::Superseded);
        }

        if let Some(state) = states.get_mut(key) {
            state.phase = QueryPhase::Idle;
        }
        tracing::warn!(target: "query_dispatch", "{} failed on {}: {}", request_id, key, err);
        Err(err)
    }

    async fn release_if_current(&self, key: &ConversationKey, request_id: RequestId) {
        let mut states = self.states.write().await;
        if Self::is_current(&states, key, request_id) {
            if let Some(state) = states.get_mut(key) {
                state.phase = QueryPhase::Idle;
            }
        }
    }

    fn is_current(
        states: &HashMap<ConversationKey, ConversationState>,
        key: &ConversationKey,
        request_id: RequestId,
    ) -> bool {
        states
            .get(key)
            .map(|s| s.phase == QueryPhase::Pending && s.request_id == request_id)
            .unwrap_or(false)
    }
}
