//! Local filesystem storage provider.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::debug;

use hub_core::error::{AppError, ErrorKind};
use hub_core::result::AppResult;
use hub_core::traits::storage::{StorageProvider, StoredObject};

/// Writes uploads under a root directory served at `public_prefix`.
#[derive(Debug, Clone)]
pub struct LocalStorageProvider {
    root: PathBuf,
    public_prefix: String,
}

impl LocalStorageProvider {
    /// Create the provider, making sure `root_path` exists. `public_prefix`
    /// is a URL path such as `/uploads`.
    pub async fn new(root_path: &str, public_prefix: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create upload directory: {}", root.display()),
                e,
            )
        })?;

        Ok(Self {
            root,
            public_prefix: format!("/{}", public_prefix.trim_matches('/')),
        })
    }

    /// Directory uploads are written to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `key` inside the root. Keys that would escape it are rejected.
    fn resolve(&self, key: &str) -> AppResult<PathBuf> {
        let relative = Path::new(key.trim_start_matches('/'));
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
        if key.trim_start_matches('/').is_empty() || escapes {
            return Err(AppError::validation(format!("Invalid storage key: {key}")));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl StorageProvider for LocalStorageProvider {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(fs::metadata(&self.root)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false))
    }

    async fn put(&self, key: &str, data: Bytes, content_type: &str) -> AppResult<StoredObject> {
        let path = self.resolve(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create directory: {}", parent.display()),
                    e,
                )
            })?;
        }

        fs::write(&path, &data).await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, format!("Failed to write upload: {key}"), e)
        })?;

        debug!(key, content_type, bytes = data.len(), "Stored upload on disk");
        Ok(StoredObject {
            key: key.to_string(),
            url: self.public_url(key),
            size_bytes: data.len() as u64,
        })
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_prefix, key.trim_start_matches('/'))
    }
}
