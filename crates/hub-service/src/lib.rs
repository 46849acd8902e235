//! # hub-service
//!
//! Use cases on top of the hub store and the upload storage provider.
//! Handlers and CLI commands call these services; they never talk to a
//! store or provider directly.
//!
//! Services follow constructor injection: every dependency is passed in
//! as an `Arc` at construction time.

pub mod hub;
pub mod upload;

pub use hub::{HubService, ImportReport, ReorderTarget};
pub use upload::{UploadRequest, UploadService, UploadValidator, UploadedFile};
