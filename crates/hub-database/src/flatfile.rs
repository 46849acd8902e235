//! Flat-file hub store: a single JSON array of hubs on local disk.
//!
//! Entries are normalized on every read, so files written by older
//! versions (legacy `actionCards` documents) load transparently. Writes go
//! to a sibling temporary file that is renamed over the target; an
//! in-process mutex serializes read-modify-write cycles.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::debug;

use hub_core::config::StoreBackend;
use hub_core::error::{AppError, ErrorKind};
use hub_core::result::AppResult;
use hub_entity::{normalize_hub, Hub, HubUpdate};

use crate::store::HubStore;

/// [`HubStore`] backed by one JSON file.
#[derive(Debug)]
pub struct JsonFileHubStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileHubStore {
    /// Store hubs in the file at `path`. The file and its parent directory
    /// are created on first write.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> AppResult<Vec<Hub>> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read hub file '{}'", self.path.display()),
                    e,
                ));
            }
        };
        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let value: Value = serde_json::from_slice(&raw)?;
        let Value::Array(entries) = value else {
            return Err(AppError::new(
                ErrorKind::Serialization,
                format!("Hub file '{}' is not a JSON array", self.path.display()),
            ));
        };
        Ok(entries.iter().map(normalize_hub).collect())
    }

    async fn write_all(&self, hubs: &[Hub]) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let body = serde_json::to_vec_pretty(hubs)?;
        let tmp = self.temp_path();
        tokio::fs::write(&tmp, body).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        debug!(path = %self.path.display(), count = hubs.len(), "Hub file written");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "hubs.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

fn newest_first(hubs: &mut [Hub]) {
    hubs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

#[async_trait]
impl HubStore for JsonFileHubStore {
    fn backend(&self) -> StoreBackend {
        StoreBackend::File
    }

    async fn list_hubs(&self) -> AppResult<Vec<Hub>> {
        let mut hubs = self.read_all().await?;
        newest_first(&mut hubs);
        Ok(hubs)
    }

    async fn get_hub(&self, slug: &str) -> AppResult<Option<Hub>> {
        Ok(self.read_all().await?.into_iter().find(|h| h.slug == slug))
    }

    async fn create_hub(&self, mut hub: Hub) -> AppResult<Hub> {
        let _guard = self.write_lock.lock().await;
        let mut hubs = self.read_all().await?;

        if hubs.iter().any(|h| h.slug == hub.slug) {
            return Err(AppError::validation(format!(
                "A hub with slug '{}' already exists",
                hub.slug
            )));
        }

        let now = Utc::now();
        hub.created_at = now;
        hub.updated_at = now;
        hubs.push(hub.clone());
        self.write_all(&hubs).await?;
        Ok(hub)
    }

    async fn update_hub(&self, slug: &str, update: HubUpdate) -> AppResult<Hub> {
        let _guard = self.write_lock.lock().await;
        let mut hubs = self.read_all().await?;

        let index = hubs
            .iter()
            .position(|h| h.slug == slug)
            .ok_or_else(|| AppError::not_found(format!("Hub '{slug}' not found")))?;

        if let Some(new_slug) = update.renamed_slug(slug) {
            if hubs.iter().any(|h| h.slug == new_slug) {
                return Err(AppError::validation(format!(
                    "A hub with slug '{new_slug}' already exists"
                )));
            }
        }

        let hub = &mut hubs[index];
        hub.apply(update);
        hub.updated_at = Utc::now();
        let updated = hub.clone();

        self.write_all(&hubs).await?;
        Ok(updated)
    }

    async fn delete_hub(&self, slug: &str) -> AppResult<bool> {
        let _guard = self.write_lock.lock().await;
        let mut hubs = self.read_all().await?;

        let before = hubs.len();
        hubs.retain(|h| h.slug != slug);
        if hubs.len() == before {
            return Ok(false);
        }
        self.write_all(&hubs).await?;
        Ok(true)
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.read_all().await.map(|_| true)
    }
}
