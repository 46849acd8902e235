//! Hub CRUD, publishing, reordering, and legacy import.

pub mod import;
pub mod service;

pub use import::ImportReport;
pub use service::{HubService, ReorderTarget};
