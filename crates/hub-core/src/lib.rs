//! # hub-core
//!
//! Core crate for Interaction Hub. Contains configuration schemas, the
//! storage provider trait used for uploads, and the unified error system.
//!
//! This crate has **no** internal dependencies on other hub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
