//! Storage provider trait for pluggable upload backends.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Result of writing an object to a storage provider.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StoredObject {
    /// Key of the object within the provider.
    pub key: String,
    /// Publicly reachable URL of the object.
    pub url: String,
    /// Size in bytes.
    pub size_bytes: u64,
}

/// Trait for upload storage backends.
///
/// Implementations exist for the local filesystem and S3-compatible
/// buckets. The trait is defined here in `hub-core` and implemented in
/// `hub-storage`.
#[async_trait]
pub trait StorageProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local", "s3").
    fn provider_type(&self) -> &str;

    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Write bytes under the given key and return where they landed.
    async fn put(&self, key: &str, data: Bytes, content_type: &str) -> AppResult<StoredObject>;

    /// Public URL an object stored under `key` is served from.
    fn public_url(&self, key: &str) -> String;
}
