//! # hub-storage
//!
//! Where uploaded images end up. The local provider writes under a
//! directory that the API serves back at `/uploads`; the S3 provider
//! (feature `s3`) writes to an S3-compatible bucket.

pub mod manager;
pub mod providers;

pub use manager::build_provider;
