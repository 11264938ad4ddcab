//! Answer provider implementations.
//!
//! Ships the simulated provider used by the product demo; real backends
//! (LLM, web search) implement `parlance_core::provider::AnswerProvider`
//! alongside it.

mod canned_provider;
mod demo_corpus;

pub use canned_provider::CannedProvider;
pub use demo_corpus::{demo_provider, seed_demo_corpus};
