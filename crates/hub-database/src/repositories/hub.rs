//! PostgreSQL hub repository.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use sqlx::{Executor, PgPool, Postgres, Transaction};
use uuid::Uuid;

use hub_core::config::StoreBackend;
use hub_core::error::{AppError, ErrorKind};
use hub_core::result::AppResult;
use hub_entity::hub::{BlockRow, HubRow};
use hub_entity::{Block, Hub, HubUpdate};

use crate::store::HubStore;

/// [`HubStore`] over the `hubs` and `blocks` tables.
#[derive(Debug, Clone)]
pub struct PgHubStore {
    pool: PgPool,
}

impl PgHubStore {
    /// Create a repository over `pool`.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn slug_taken(tx: &mut Transaction<'_, Postgres>, slug: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM hubs WHERE slug = $1)")
            .bind(slug)
            .fetch_one(&mut **tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check slug", e))
    }

    async fn insert_blocks(
        tx: &mut Transaction<'_, Postgres>,
        hub_id: Uuid,
        blocks: &[Block],
    ) -> AppResult<()> {
        for (i, block) in blocks.iter().enumerate() {
            sqlx::query(
                "INSERT INTO blocks (hub_id, id, title, description, image_url, url, \
                 aspect_ratio, accent_color, badge, is_visible, sort_order) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
            )
            .bind(hub_id)
            .bind(&block.id)
            .bind(&block.title)
            .bind(&block.description)
            .bind(&block.image_url)
            .bind(&block.url)
            .bind(block.aspect_ratio.as_str())
            .bind(&block.accent_color)
            .bind(&block.badge)
            .bind(block.is_visible)
            .bind(i as i32)
            .execute(&mut **tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert block", e))?;
        }
        Ok(())
    }

    async fn begin(&self) -> AppResult<Transaction<'static, Postgres>> {
        self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })
    }
}

async fn fetch_blocks<'e, E>(executor: E, hub_id: Uuid) -> AppResult<Vec<BlockRow>>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as::<_, BlockRow>("SELECT * FROM blocks WHERE hub_id = $1 ORDER BY sort_order ASC")
        .bind(hub_id)
        .fetch_all(executor)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load blocks", e))
}

/// Current time at the microsecond precision Postgres stores.
fn db_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

async fn commit(tx: Transaction<'_, Postgres>) -> AppResult<()> {
    tx.commit()
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to commit", e))
}

fn json_column<T: serde::Serialize>(value: &T) -> AppResult<serde_json::Value> {
    Ok(serde_json::to_value(value)?)
}

/// Map a write error, turning a unique violation on `slug` into a
/// validation error.
fn write_error(slug: &str, context: &str, e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            return AppError::validation(format!("A hub with slug '{slug}' already exists"));
        }
    }
    AppError::with_source(ErrorKind::Database, context.to_string(), e)
}

#[async_trait]
impl HubStore for PgHubStore {
    fn backend(&self) -> StoreBackend {
        StoreBackend::Postgres
    }

    async fn list_hubs(&self) -> AppResult<Vec<Hub>> {
        let rows = sqlx::query_as::<_, HubRow>("SELECT * FROM hubs ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list hubs", e))?;

        let block_rows = sqlx::query_as::<_, BlockRow>(
            "SELECT * FROM blocks ORDER BY hub_id, sort_order ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list blocks", e))?;

        let mut by_hub: HashMap<Uuid, Vec<BlockRow>> = HashMap::new();
        for block in block_rows {
            by_hub.entry(block.hub_id).or_default().push(block);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let blocks = by_hub.remove(&row.id).unwrap_or_default();
                row.into_hub(blocks)
            })
            .collect())
    }

    async fn get_hub(&self, slug: &str) -> AppResult<Option<Hub>> {
        let row = sqlx::query_as::<_, HubRow>("SELECT * FROM hubs WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find hub", e))?;

        match row {
            Some(row) => {
                let blocks = fetch_blocks(&self.pool, row.id).await?;
                Ok(Some(row.into_hub(blocks)))
            }
            None => Ok(None),
        }
    }

    async fn create_hub(&self, mut hub: Hub) -> AppResult<Hub> {
        let now = db_now();
        hub.created_at = now;
        hub.updated_at = now;
        hub_entity::reorder::renumber(&mut hub.blocks);

        let hub_id = Uuid::now_v7();
        let mut tx = self.begin().await?;

        sqlx::query(
            "INSERT INTO hubs (id, slug, event_name, logo_url, hero_image_url, \
             sponsor_banner_url, sponsor_link, block_color, background_color, header_font, \
             body_font, custom_font_url, hero_tagline, hero_subtext, social_links, \
             section_order, is_published, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19)",
        )
        .bind(hub_id)
        .bind(&hub.slug)
        .bind(&hub.event_name)
        .bind(&hub.logo_url)
        .bind(&hub.hero_image_url)
        .bind(&hub.sponsor_banner_url)
        .bind(&hub.sponsor_link)
        .bind(&hub.block_color)
        .bind(&hub.background_color)
        .bind(&hub.header_font)
        .bind(&hub.body_font)
        .bind(&hub.custom_font_url)
        .bind(&hub.hero_tagline)
        .bind(&hub.hero_subtext)
        .bind(json_column(&hub.social_links)?)
        .bind(json_column(&hub.section_order)?)
        .bind(hub.is_published)
        .bind(hub.created_at)
        .bind(hub.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| write_error(&hub.slug, "Failed to create hub", e))?;

        Self::insert_blocks(&mut tx, hub_id, &hub.blocks).await?;
        commit(tx).await?;

        tracing::info!(slug = %hub.slug, blocks = hub.blocks.len(), "Hub created");
        Ok(hub)
    }

    async fn update_hub(&self, slug: &str, update: HubUpdate) -> AppResult<Hub> {
        let mut tx = self.begin().await?;

        let row = sqlx::query_as::<_, HubRow>("SELECT * FROM hubs WHERE slug = $1 FOR UPDATE")
            .bind(slug)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find hub", e))?
            .ok_or_else(|| AppError::not_found(format!("Hub '{slug}' not found")))?;

        if let Some(new_slug) = update.renamed_slug(slug) {
            if Self::slug_taken(&mut tx, new_slug).await? {
                return Err(AppError::validation(format!(
                    "A hub with slug '{new_slug}' already exists"
                )));
            }
        }

        let hub_id = row.id;
        let replace_blocks = update.blocks.is_some();
        let current_blocks = if replace_blocks {
            Vec::new()
        } else {
            fetch_blocks(&mut *tx, hub_id).await?
        };

        let mut hub = row.into_hub(current_blocks);
        hub.apply(update);
        hub.updated_at = db_now();

        sqlx::query(
            "UPDATE hubs SET slug = $2, event_name = $3, logo_url = $4, hero_image_url = $5, \
             sponsor_banner_url = $6, sponsor_link = $7, block_color = $8, \
             background_color = $9, header_font = $10, body_font = $11, custom_font_url = $12, \
             hero_tagline = $13, hero_subtext = $14, social_links = $15, section_order = $16, \
             is_published = $17, updated_at = $18 WHERE id = $1",
        )
        .bind(hub_id)
        .bind(&hub.slug)
        .bind(&hub.event_name)
        .bind(&hub.logo_url)
        .bind(&hub.hero_image_url)
        .bind(&hub.sponsor_banner_url)
        .bind(&hub.sponsor_link)
        .bind(&hub.block_color)
        .bind(&hub.background_color)
        .bind(&hub.header_font)
        .bind(&hub.body_font)
        .bind(&hub.custom_font_url)
        .bind(&hub.hero_tagline)
        .bind(&hub.hero_subtext)
        .bind(json_column(&hub.social_links)?)
        .bind(json_column(&hub.section_order)?)
        .bind(hub.is_published)
        .bind(hub.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| write_error(&hub.slug, "Failed to update hub", e))?;

        if replace_blocks {
            sqlx::query("DELETE FROM blocks WHERE hub_id = $1")
                .bind(hub_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to clear blocks", e)
                })?;
            Self::insert_blocks(&mut tx, hub_id, &hub.blocks).await?;
        }

        commit(tx).await?;
        Ok(hub)
    }

    async fn delete_hub(&self, slug: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM hubs WHERE slug = $1")
            .bind(slug)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete hub", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }
}
