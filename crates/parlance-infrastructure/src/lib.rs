//! In-memory implementations of the Parlance storage traits.
//!
//! These back the single-process deployment: shared mutable maps with
//! per-key write serialization and snapshot reads. Persistent backends
//! would implement the same `parlance-core` traits.

mod in_memory_conversation_store;
mod in_memory_file_registry;

pub use in_memory_conversation_store::InMemoryConversationStore;
pub use in_memory_file_registry::InMemoryFileRegistry;
