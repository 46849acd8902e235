//! The hub persistence seam and backend selection.

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use hub_core::config::{AppConfig, StoreBackend};
use hub_core::result::AppResult;
use hub_entity::{Hub, HubUpdate};

use crate::connection::DatabasePool;
use crate::flatfile::JsonFileHubStore;
use crate::migration::run_migrations;
use crate::repositories::PgHubStore;

/// CRUD operations over hubs, keyed by slug.
///
/// Implementations are last-write-wins; there is no conflict detection.
#[async_trait]
pub trait HubStore: Send + Sync + Debug + 'static {
    /// Which backend this is.
    fn backend(&self) -> StoreBackend;

    /// All hubs, newest first.
    async fn list_hubs(&self) -> AppResult<Vec<Hub>>;

    /// One hub, or `None` if the slug is unknown.
    async fn get_hub(&self, slug: &str) -> AppResult<Option<Hub>>;

    /// Insert a new hub, stamping `createdAt`/`updatedAt`.
    ///
    /// Fails with a validation error if the slug is already taken.
    async fn create_hub(&self, hub: Hub) -> AppResult<Hub>;

    /// Apply `update` to the hub with `slug`, stamping `updatedAt`.
    ///
    /// Fails with not-found if the hub is absent and with a validation error
    /// if the update renames it onto another hub's slug. A present block
    /// list replaces every stored block.
    async fn update_hub(&self, slug: &str, update: HubUpdate) -> AppResult<Hub>;

    /// Delete the hub with `slug`. Returns `false` if it did not exist.
    async fn delete_hub(&self, slug: &str) -> AppResult<bool>;

    /// Whether the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}

/// Open the store selected by `store.backend`.
///
/// The Postgres backend connects eagerly and runs migrations when
/// `database.run_migrations` is set.
pub async fn open_store(config: &AppConfig) -> AppResult<Arc<dyn HubStore>> {
    match config.store.backend {
        StoreBackend::File => {
            info!(path = %config.store.file_path, "Using flat-file hub store");
            Ok(Arc::new(JsonFileHubStore::new(&config.store.file_path)))
        }
        StoreBackend::Postgres => {
            let db = DatabasePool::connect(&config.database).await?;
            if config.database.run_migrations {
                run_migrations(db.pool()).await?;
            }
            info!("Using PostgreSQL hub store");
            Ok(Arc::new(PgHubStore::new(db.into_pool())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.store.file_path = dir.path().join("hubs.json").display().to_string();

        let store = open_store(&config).await.unwrap();
        assert_eq!(store.backend(), StoreBackend::File);
        assert!(store.list_hubs().await.unwrap().is_empty());
    }
}
