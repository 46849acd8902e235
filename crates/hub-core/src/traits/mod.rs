//! Core trait definitions implemented by other hub crates.

pub mod storage;

pub use storage::{StorageProvider, StoredObject};
