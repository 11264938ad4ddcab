//! Domain layer of the Parlance orchestration workspace.
//!
//! Defines the shared vocabulary (files, conversations, query lifecycle),
//! the trait seams (`FileRegistry`, `ConversationStore`, `AnswerProvider`),
//! and the shared error type. Implementations live in the infrastructure
//! and interaction crates; composition lives in the application crate.

pub mod config;
pub mod conversation;
pub mod domain;
pub mod error;
pub mod file;
pub mod provider;
pub mod query;

// Re-export common error types
pub use error::{ParlanceError, ProviderError, Result};
