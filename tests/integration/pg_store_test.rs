//! The PostgreSQL hub store against a live database.
//!
//! Runs only when `DATABASE_URL` points at a scratch database.

use sqlx::PgPool;
use uuid::Uuid;

use hub_core::error::ErrorKind;
use hub_database::HubStore;
use hub_entity::{Block, Hub, HubUpdate};

use crate::helpers::{pg_store, unique_slug};

fn hub_with_blocks(slug: &str, ids: &[&str]) -> Hub {
    let mut hub = Hub::new(slug, "Postgres Cup");
    hub.blocks = ids
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let mut block = Block::new(*id, i as i32);
            block.title = id.to_uppercase();
            block
        })
        .collect();
    hub
}

async fn hub_id(pool: &PgPool, slug: &str) -> Uuid {
    sqlx::query_scalar("SELECT id FROM hubs WHERE slug = $1")
        .bind(slug)
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn block_rows(pool: &PgPool, hub_id: Uuid) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM blocks WHERE hub_id = $1")
        .bind(hub_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[tokio::test]
async fn test_pg_block_list_is_replaced() {
    let Some((store, pool)) = pg_store().await else { return };
    let slug = unique_slug("replace");
    store.create_hub(hub_with_blocks(&slug, &["a", "b", "c"])).await.unwrap();
    let id = hub_id(&pool, &slug).await;
    assert_eq!(block_rows(&pool, id).await, 3);

    let mut kept = Block::new("c", 7);
    kept.title = "Kept".into();
    let update = HubUpdate {
        blocks: Some(vec![kept, Block::new("d", 9)]),
        ..Default::default()
    };
    store.update_hub(&slug, update).await.unwrap();

    let hub = store.get_hub(&slug).await.unwrap().unwrap();
    let ids: Vec<_> = hub.blocks.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, ["c", "d"]);
    assert_eq!(hub.blocks[0].title, "Kept");
    let orders: Vec<_> = hub.blocks.iter().map(|b| b.sort_order).collect();
    assert_eq!(orders, [0, 1]);
    assert_eq!(block_rows(&pool, id).await, 2);

    let update = HubUpdate {
        hero_tagline: Some("Only the tagline".into()),
        ..Default::default()
    };
    let hub = store.update_hub(&slug, update).await.unwrap();
    assert_eq!(hub.blocks.len(), 2);
    assert_eq!(block_rows(&pool, id).await, 2);

    store.delete_hub(&slug).await.unwrap();
}

#[tokio::test]
async fn test_pg_delete_cascades_to_blocks() {
    let Some((store, pool)) = pg_store().await else { return };
    let slug = unique_slug("cascade");
    store.create_hub(hub_with_blocks(&slug, &["a", "b"])).await.unwrap();
    let id = hub_id(&pool, &slug).await;

    assert!(store.delete_hub(&slug).await.unwrap());
    assert_eq!(block_rows(&pool, id).await, 0);
    assert!(store.get_hub(&slug).await.unwrap().is_none());
    assert!(!store.delete_hub(&slug).await.unwrap());
}

#[tokio::test]
async fn test_pg_duplicate_slug_is_validation_error() {
    let Some((store, _pool)) = pg_store().await else { return };
    let slug = unique_slug("dupe");
    store.create_hub(hub_with_blocks(&slug, &["a"])).await.unwrap();

    let err = store.create_hub(hub_with_blocks(&slug, &["x", "y"])).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);

    let stored = store.get_hub(&slug).await.unwrap().unwrap();
    assert_eq!(stored.blocks.len(), 1);

    store.delete_hub(&slug).await.unwrap();
}

#[tokio::test]
async fn test_pg_rename() {
    let Some((store, _pool)) = pg_store().await else { return };
    let first = unique_slug("first");
    let second = unique_slug("second");
    store.create_hub(hub_with_blocks(&first, &["a", "b"])).await.unwrap();
    store.create_hub(Hub::new(second.as_str(), "Second")).await.unwrap();

    let onto_taken = HubUpdate {
        slug: Some(second.clone()),
        ..Default::default()
    };
    let err = store.update_hub(&first, onto_taken).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
    assert!(store.get_hub(&first).await.unwrap().is_some());

    let renamed = unique_slug("renamed");
    let update = HubUpdate {
        slug: Some(renamed.clone()),
        ..Default::default()
    };
    let hub = store.update_hub(&first, update).await.unwrap();
    assert_eq!(hub.slug, renamed);
    assert!(store.get_hub(&first).await.unwrap().is_none());
    assert_eq!(store.get_hub(&renamed).await.unwrap().unwrap().blocks.len(), 2);

    let err = store
        .update_hub(&first, HubUpdate::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);

    store.delete_hub(&renamed).await.unwrap();
    store.delete_hub(&second).await.unwrap();
}
