//! Uploaded-file domain module.
//!
//! - `model`: file records, media types, listing filters
//! - `registry`: the `FileRegistry` trait owning file metadata

mod model;
mod registry;

pub use model::{FileFilter, FileRecord, MediaType, NewFile};
pub use registry::FileRegistry;
