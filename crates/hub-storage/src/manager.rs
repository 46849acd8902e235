//! Provider selection from configuration.

use std::sync::Arc;

use tracing::info;

use hub_core::config::{StorageConfig, StorageProviderKind};
use hub_core::result::AppResult;
use hub_core::traits::storage::StorageProvider;

use crate::providers::LocalStorageProvider;

/// Build the upload provider named by `storage.provider`.
pub async fn build_provider(config: &StorageConfig) -> AppResult<Arc<dyn StorageProvider>> {
    match config.provider {
        StorageProviderKind::Local => {
            let mount = config.local.mount_path()?;
            let provider = LocalStorageProvider::new(&config.local.root_path, &mount).await?;
            info!(root = %config.local.root_path, "Using local upload storage");
            Ok(Arc::new(provider))
        }
        #[cfg(feature = "s3")]
        StorageProviderKind::S3 => {
            let provider = crate::providers::S3StorageProvider::new(&config.s3).await?;
            Ok(Arc::new(provider))
        }
        #[cfg(not(feature = "s3"))]
        StorageProviderKind::S3 => Err(hub_core::AppError::configuration(
            "storage.provider = \"s3\" requires building with the `s3` feature",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_builds_local_provider() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = StorageConfig::default();
        config.local.root_path = dir.path().join("uploads").display().to_string();

        let provider = build_provider(&config).await.unwrap();
        assert_eq!(provider.provider_type(), "local");
        assert!(provider.health_check().await.unwrap());
    }

    #[tokio::test]
    async fn test_rejects_root_public_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = StorageConfig::default();
        config.local.root_path = dir.path().join("uploads").display().to_string();
        config.local.public_prefix = "/".to_string();

        let err = build_provider(&config).await.unwrap_err();
        assert_eq!(err.kind, hub_core::error::ErrorKind::Configuration);
    }
}
