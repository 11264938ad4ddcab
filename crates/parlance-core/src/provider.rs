//! Answer provider boundary.
//!
//! The provider is the external collaborator that turns a query into an
//! answer string. Real implementations wrap an LLM or search backend; the
//! orchestration layer only depends on this trait.

use crate::domain::Domain;
use crate::error::ProviderError;
use crate::file::FileRecord;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One answer request handed to a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRequest {
    /// The user's query text, already trimmed and validated.
    pub query: String,
    /// Knowledge domain the query was submitted under.
    pub domain: Domain,
    /// The file the conversation is bound to, if any. Open-search queries
    /// carry no file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<FileRecord>,
}

/// External collaborator that answers queries.
///
/// Calls are expected to be latency-bearing (hundreds of milliseconds to
/// seconds). Implementations must be safe to call concurrently for
/// different conversations; the dispatcher enforces at-most-one in-flight
/// call per conversation and applies its own timeout around `answer`.
#[async_trait]
pub trait AnswerProvider: Send + Sync {
    /// Produces an answer for the request.
    ///
    /// # Errors
    ///
    /// - `ProviderError::Unavailable`: the backend could not be reached or
    ///   refused the request
    /// - `ProviderError::Timeout`: the backend gave up on its own
    async fn answer(&self, request: &AnswerRequest) -> Result<String, ProviderError>;
}
