//! Error types for the Parlance orchestration layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the orchestration layer.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait. Every failure is scoped to
/// one operation on one conversation or file; nothing here is fatal to the
/// process.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum ParlanceError {
    /// Bad input, rejected synchronously (empty query, unknown media type, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound { entity_type: String, id: String },

    /// A submit arrived while the conversation already has a pending query
    #[error("A query is already pending for conversation '{conversation}'")]
    ConcurrentQuery { conversation: String },

    /// The answer provider failed for one query attempt
    #[error("Answer provider error: {message}")]
    Provider { message: String, retryable: bool },

    /// The answer provider did not respond within the configured timeout
    #[error("Answer provider timed out after {elapsed_ms}ms")]
    Timeout { elapsed_ms: u64 },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ParlanceError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.into(),
        }
    }

    /// Creates a ConcurrentQuery error for the given conversation key
    pub fn concurrent_query(conversation: impl ToString) -> Self {
        Self::ConcurrentQuery {
            conversation: conversation.to_string(),
        }
    }

    /// Creates a Provider error
    pub fn provider(message: impl Into<String>, retryable: bool) -> Self {
        Self::Provider {
            message: message.into(),
            retryable,
        }
    }

    /// Creates a Timeout error from the elapsed wait
    pub fn timeout(elapsed: std::time::Duration) -> Self {
        Self::Timeout {
            elapsed_ms: elapsed.as_millis() as u64,
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a ConcurrentQuery error
    pub fn is_concurrent_query(&self) -> bool {
        matches!(self, Self::ConcurrentQuery { .. })
    }

    /// Check if this is a Timeout error
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Check if this error is worth retrying with a fresh submit.
    ///
    /// Returns true for:
    /// - `Timeout` errors
    /// - `Provider` errors flagged as retryable
    /// - `ConcurrentQuery` (retry after the current query resolves)
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout { .. } => true,
            Self::Provider { retryable, .. } => *retryable,
            Self::ConcurrentQuery { .. } => true,
            _ => false,
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<serde_json::Error> for ParlanceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<anyhow::Error> for ParlanceError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<ProviderError> for ParlanceError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Unavailable(message) => Self::Provider {
                message,
                retryable: true,
            },
            ProviderError::Timeout => Self::Timeout { elapsed_ms: 0 },
        }
    }
}

/// A type alias for `Result<T, ParlanceError>`.
pub type Result<T> = std::result::Result<T, ParlanceError>;

/// Failures reported by an [`AnswerProvider`](crate::provider::AnswerProvider).
///
/// Kept separate from [`ParlanceError`] so provider implementations never
/// depend on orchestration-level variants; the dispatcher converts at the
/// boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider could not be reached or refused the request.
    #[error("answer provider unavailable: {0}")]
    Unavailable(String),
    /// The provider gave up on the request itself.
    #[error("answer provider timed out")]
    Timeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        assert!(ParlanceError::validation("empty").is_validation());
        assert!(ParlanceError::not_found("file", "42").is_not_found());
        assert!(ParlanceError::concurrent_query("file:1").is_concurrent_query());
        assert!(ParlanceError::timeout(std::time::Duration::from_millis(5)).is_timeout());
        assert!(!ParlanceError::internal("boom").is_validation());
    }

    #[test]
    fn test_retryable_classification() {
        assert!(ParlanceError::timeout(std::time::Duration::ZERO).is_retryable());
        assert!(ParlanceError::provider("503", true).is_retryable());
        assert!(!ParlanceError::provider("bad request", false).is_retryable());
        assert!(!ParlanceError::validation("empty").is_retryable());
    }

    #[test]
    fn test_provider_error_conversion() {
        let err: ParlanceError = ProviderError::Unavailable("down".to_string()).into();
        assert!(matches!(err, ParlanceError::Provider { retryable: true, .. }));

        let err: ParlanceError = ProviderError::Timeout.into();
        assert!(err.is_timeout());
    }
}
