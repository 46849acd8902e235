//! Fan-facing hub page.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::dto::request::PageQuery;
use crate::error::ApiError;
use crate::render::{not_found_page, render_hub};
use crate::state::AppState;

/// GET /h/{slug}
pub async fn hub_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<PageQuery>,
) -> Response {
    match state.hub_service.get_public(&slug, query.preview).await {
        Ok(hub) => Html(render_hub(&hub).into_string()).into_response(),
        Err(e) if e.is_not_found() => (
            StatusCode::NOT_FOUND,
            Html(not_found_page().into_string()),
        )
            .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
