//! Conversation domain module.
//!
//! - `key`: conversation identity (`ConversationKey`)
//! - `message`: message types (`Sender`, `Message`, `MessageDraft`)
//! - `store`: the `ConversationStore` trait owning message logs

mod key;
mod message;
mod store;

pub use key::ConversationKey;
pub use message::{Message, MessageDraft, Sender};
pub use store::ConversationStore;
