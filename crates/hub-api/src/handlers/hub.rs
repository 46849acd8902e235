//! Hub CRUD and reorder handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde_json::Value;

use hub_entity::Hub;

use crate::dto::request::{CreateHubRequest, ListQuery, ReorderRequest};
use crate::dto::response::DeleteResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/hubs
pub async fn list_hubs(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Hub>>, ApiError> {
    let hubs = state.hub_service.list(query.q.as_deref()).await?;
    Ok(Json(hubs))
}

/// POST /api/hubs
pub async fn create_hub(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Hub>), ApiError> {
    let Json(body) = payload?;
    CreateHubRequest::check(&body)?;
    let hub = state.hub_service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(hub)))
}

/// GET /api/hubs/{slug}
pub async fn get_hub(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Hub>, ApiError> {
    Ok(Json(state.hub_service.get(&slug).await?))
}

/// PUT /api/hubs/{slug}
pub async fn update_hub(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Hub>, ApiError> {
    let Json(body) = payload?;
    Ok(Json(state.hub_service.update(&slug, &body).await?))
}

/// DELETE /api/hubs/{slug}
pub async fn delete_hub(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    state.hub_service.delete(&slug).await?;
    Ok(Json(DeleteResponse { success: true }))
}

/// POST /api/hubs/{slug}/reorder
pub async fn reorder_hub(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    payload: Result<Json<ReorderRequest>, JsonRejection>,
) -> Result<Json<Hub>, ApiError> {
    let Json(req) = payload?;
    let (from, to) = req.positions();
    let hub = state.hub_service.reorder(&slug, req.target, from, to).await?;
    Ok(Json(hub))
}
