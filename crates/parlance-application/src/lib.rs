//! Application layer of the Parlance orchestration workspace.
//!
//! - `dispatcher`: the per-conversation query lifecycle state machine
//! - `facade`: the `SessionFacade` clients talk to

pub mod dispatcher;
pub mod facade;

pub use dispatcher::QueryDispatcher;
pub use facade::SessionFacade;
