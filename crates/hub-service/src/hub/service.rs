//! Hub service: the CRUD use cases behind `/api/hubs` and the CLI.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use hub_core::error::AppError;
use hub_core::result::AppResult;
use hub_database::HubStore;
use hub_entity::slug::{derive_slug, is_valid_slug};
use hub_entity::{normalize_hub, Hub, HubUpdate};

/// Which ordered list a reorder applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReorderTarget {
    /// The block list.
    Blocks,
    /// The page section order.
    Sections,
}

impl fmt::Display for ReorderTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blocks => write!(f, "blocks"),
            Self::Sections => write!(f, "sections"),
        }
    }
}

/// Hub use cases over a [`HubStore`].
#[derive(Debug, Clone)]
pub struct HubService {
    store: Arc<dyn HubStore>,
}

impl HubService {
    /// Creates a new hub service.
    pub fn new(store: Arc<dyn HubStore>) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<dyn HubStore> {
        &self.store
    }

    /// All hubs, newest first, optionally filtered by a case-insensitive
    /// match on event name or slug.
    pub async fn list(&self, query: Option<&str>) -> AppResult<Vec<Hub>> {
        let hubs = self.store.list_hubs().await?;
        let Some(needle) = query.map(str::trim).filter(|q| !q.is_empty()) else {
            return Ok(hubs);
        };

        let needle = needle.to_lowercase();
        Ok(hubs
            .into_iter()
            .filter(|h| {
                h.event_name.to_lowercase().contains(&needle)
                    || h.slug.to_lowercase().contains(&needle)
            })
            .collect())
    }

    /// One hub by slug.
    pub async fn get(&self, slug: &str) -> AppResult<Hub> {
        self.store
            .get_hub(slug)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Hub '{slug}' not found")))
    }

    /// A hub as the public page sees it: unpublished hubs are hidden unless
    /// `preview` is set.
    pub async fn get_public(&self, slug: &str, preview: bool) -> AppResult<Hub> {
        let hub = self.get(slug).await?;
        if !hub.is_published && !preview {
            return Err(AppError::not_found(format!("Hub '{slug}' not found")));
        }
        Ok(hub)
    }

    /// Create a hub from a request body.
    ///
    /// The body is normalized like a stored document, so any subset of
    /// fields is accepted. The slug comes from `slug`, else `eventName`,
    /// else `new-hub`.
    pub async fn create(&self, body: &Value) -> AppResult<Hub> {
        if !body.is_object() {
            return Err(AppError::validation("Hub payload must be a JSON object"));
        }

        let slug = derive_slug(
            body.get("slug").and_then(Value::as_str),
            body.get("eventName").and_then(Value::as_str),
        );
        let mut hub = normalize_hub(body);
        hub.slug = slug;

        let hub = self.store.create_hub(hub).await?;
        info!(slug = %hub.slug, "Hub created");
        Ok(hub)
    }

    /// Replace a hub with a full document sent by the editor.
    pub async fn update(&self, slug: &str, body: &Value) -> AppResult<Hub> {
        let update = HubUpdate::from_json(body)?;
        self.apply(slug, update).await
    }

    /// Apply a typed update. A present slug must already be canonical; an
    /// empty one is ignored.
    pub async fn apply(&self, slug: &str, mut update: HubUpdate) -> AppResult<Hub> {
        update.slug = update.slug.filter(|s| !s.is_empty());
        if let Some(new_slug) = update.slug.as_deref() {
            if !is_valid_slug(new_slug) {
                return Err(AppError::validation(format!(
                    "Invalid slug '{new_slug}': use lowercase letters, digits, and single dashes"
                )));
            }
        }

        let hub = self.store.update_hub(slug, update).await?;
        if hub.slug != slug {
            info!(from = %slug, to = %hub.slug, "Hub renamed");
        }
        Ok(hub)
    }

    /// Set the publish flag.
    pub async fn set_published(&self, slug: &str, published: bool) -> AppResult<Hub> {
        let hub = self
            .apply(
                slug,
                HubUpdate {
                    is_published: Some(published),
                    ..Default::default()
                },
            )
            .await?;
        info!(slug, published, "Hub publish state changed");
        Ok(hub)
    }

    /// Move an item within the block list or section order.
    ///
    /// No-op moves (same index, out of range) return the hub unchanged
    /// without writing.
    pub async fn reorder(
        &self,
        slug: &str,
        target: ReorderTarget,
        from: usize,
        to: usize,
    ) -> AppResult<Hub> {
        let mut hub = self.get(slug).await?;

        let update = match target {
            ReorderTarget::Blocks if hub.reorder_blocks(from, to) => HubUpdate {
                blocks: Some(hub.blocks),
                ..Default::default()
            },
            ReorderTarget::Sections if hub.reorder_sections(from, to) => HubUpdate {
                section_order: Some(hub.section_order),
                ..Default::default()
            },
            _ => return Ok(hub),
        };

        info!(slug, %target, from, to, "Reordered");
        self.store.update_hub(slug, update).await
    }

    /// Delete a hub.
    pub async fn delete(&self, slug: &str) -> AppResult<()> {
        if !self.store.delete_hub(slug).await? {
            return Err(AppError::not_found(format!("Hub '{slug}' not found")));
        }
        info!(slug, "Hub deleted");
        Ok(())
    }

    /// Whether the store is reachable.
    pub async fn health(&self) -> AppResult<bool> {
        self.store.health_check().await
    }
}
