//! Query lifecycle vocabulary.
//!
//! A conversation's query lifecycle is `Idle -> Pending -> {answered,
//! failed} -> Idle`. The answered/failed states are transient: they are
//! folded back to `Idle` before `submit` returns, so the only steady states
//! a client can observe are the two variants of [`QueryPhase`]. Outcomes
//! travel in the submit result instead.

use crate::conversation::Message;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Steady lifecycle state of one conversation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryPhase {
    /// No query in flight; a new submit is accepted.
    #[default]
    Idle,
    /// A query is in flight; further submits are rejected.
    Pending,
}

/// Identifies one submit attempt.
///
/// Monotonically increasing per dispatcher; used to discard responses that
/// arrive after their attempt was cancelled or superseded. The default id 0
/// is never handed to a real attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "req-{}", self.0)
    }
}

/// Result of a successful provider round-trip, as seen by the submitter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QueryOutcome {
    /// The answer was accepted and appended to the conversation.
    Answered(Message),
    /// The attempt was cancelled or superseded while in flight; its result
    /// was discarded and nothing was appended.
    Superseded,
}

impl QueryOutcome {
    /// The appended assistant message, if the attempt was still current.
    pub fn message(&self) -> Option<&Message> {
        match self {
            Self::Answered(message) => Some(message),
            Self::Superseded => None,
        }
    }
}
