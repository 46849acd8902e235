//! Upload storage provider configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;

/// First path segments owned by the API and the hub pages.
const RESERVED_SEGMENTS: &[&str] = &["api", "h"];

/// Which provider receives uploaded files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProviderKind {
    /// Local filesystem, served back under the public prefix.
    #[default]
    Local,
    /// S3-compatible object storage bucket.
    S3,
}

/// Top-level upload storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Provider receiving uploads.
    #[serde(default)]
    pub provider: StorageProviderKind,
    /// Maximum upload size in bytes (default 5 MB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
    /// MIME types accepted by the upload endpoint.
    #[serde(default = "default_allowed_mime_types")]
    pub allowed_mime_types: Vec<String>,
    /// Local filesystem storage configuration.
    #[serde(default)]
    pub local: LocalStorageConfig,
    /// S3-compatible storage configuration.
    #[serde(default)]
    pub s3: S3StorageConfig,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            provider: StorageProviderKind::default(),
            max_upload_size_bytes: default_max_upload(),
            allowed_mime_types: default_allowed_mime_types(),
            local: LocalStorageConfig::default(),
            s3: S3StorageConfig::default(),
        }
    }
}

/// Local filesystem storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalStorageConfig {
    /// Root path for uploaded files.
    #[serde(default = "default_local_root")]
    pub root_path: String,
    /// URL path prefix the uploads are served under.
    #[serde(default = "default_public_prefix")]
    pub public_prefix: String,
}

impl LocalStorageConfig {
    /// The path uploads are mounted at, normalized to `/segment[/...]`.
    ///
    /// The root, a full URL, and paths under `/api` or `/h` are rejected
    /// since they would shadow or collide with other routes.
    pub fn mount_path(&self) -> AppResult<String> {
        let trimmed = self.public_prefix.trim().trim_matches('/');
        let first = trimmed.split('/').next().unwrap_or_default();
        if trimmed.is_empty()
            || trimmed.contains("://")
            || trimmed.split('/').any(str::is_empty)
            || RESERVED_SEGMENTS.contains(&first)
        {
            return Err(AppError::configuration(format!(
                "storage.local.public_prefix must be a non-root path outside /api and /h, got '{}'",
                self.public_prefix
            )));
        }
        Ok(format!("/{trimmed}"))
    }
}

impl Default for LocalStorageConfig {
    fn default() -> Self {
        Self {
            root_path: default_local_root(),
            public_prefix: default_public_prefix(),
        }
    }
}

/// S3-compatible object storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3StorageConfig {
    /// S3 endpoint URL (for non-AWS services like MinIO). Empty for AWS.
    #[serde(default)]
    pub endpoint: String,
    /// AWS region.
    #[serde(default = "default_region")]
    pub region: String,
    /// S3 bucket name.
    #[serde(default)]
    pub bucket: String,
    /// Access key ID.
    #[serde(default)]
    pub access_key: String,
    /// Secret access key.
    #[serde(default)]
    pub secret_key: String,
    /// Base URL objects are publicly reachable under.
    #[serde(default)]
    pub public_base_url: String,
    /// Key prefix prepended to every uploaded object.
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

impl Default for S3StorageConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            region: default_region(),
            bucket: String::new(),
            access_key: String::new(),
            secret_key: String::new(),
            public_base_url: String::new(),
            key_prefix: default_key_prefix(),
        }
    }
}

fn default_max_upload() -> u64 {
    5 * 1024 * 1024
}

fn default_allowed_mime_types() -> Vec<String> {
    [
        "image/png",
        "image/jpeg",
        "image/svg+xml",
        "image/webp",
        "image/gif",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_local_root() -> String {
    "./data/uploads".to_string()
}

fn default_public_prefix() -> String {
    "/uploads".to_string()
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_key_prefix() -> String {
    "uploads".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local(prefix: &str) -> LocalStorageConfig {
        LocalStorageConfig {
            public_prefix: prefix.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_mount_path_normalizes() {
        assert_eq!(local("/uploads").mount_path().unwrap(), "/uploads");
        assert_eq!(local("uploads/").mount_path().unwrap(), "/uploads");
        assert_eq!(local("/static/img").mount_path().unwrap(), "/static/img");
    }

    #[test]
    fn test_mount_path_rejects_root_and_reserved() {
        for prefix in ["", "/", "//", "api", "/h/uploads", "https://cdn.example.com", "/a//b"] {
            assert!(local(prefix).mount_path().is_err(), "{prefix}");
        }
    }
}
