//! Route definitions for the Interaction Hub HTTP surface.
//!
//! The JSON API is mounted under `/api`, the fan page at `/h/{slug}`, and
//! locally stored uploads under the configured public prefix.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use hub_core::config::StorageProviderKind;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Slack on top of the upload ceiling for multipart framing, so a file just
/// over the limit reaches the validator and gets its message.
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(hub_routes())
        .merge(upload_routes(&state))
        .route("/health", get(handlers::health::health));

    let mut router = Router::new()
        .nest("/api", api_routes)
        .route("/h/{slug}", get(handlers::page::hub_page));

    // `build_state` already rejected an unusable prefix.
    if state.config.storage.provider == StorageProviderKind::Local {
        let local = &state.config.storage.local;
        if let Ok(mount) = local.mount_path() {
            router = router.nest_service(&mount, ServeDir::new(&local.root_path));
        }
    }

    let cors = build_cors_layer(&state.config.server.cors);

    router
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::security::security_headers))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Hub CRUD and reorder.
fn hub_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/hubs",
            get(handlers::hub::list_hubs).post(handlers::hub::create_hub),
        )
        .route(
            "/hubs/{slug}",
            get(handlers::hub::get_hub)
                .put(handlers::hub::update_hub)
                .delete(handlers::hub::delete_hub),
        )
        .route("/hubs/{slug}/reorder", post(handlers::hub::reorder_hub))
}

/// Image upload with a body limit sized to the upload ceiling.
fn upload_routes(state: &AppState) -> Router<AppState> {
    let limit = usize::try_from(state.upload_service.max_bytes())
        .unwrap_or(usize::MAX)
        .saturating_add(MULTIPART_OVERHEAD_BYTES);

    Router::new().route(
        "/upload",
        post(handlers::upload::upload_file).layer(DefaultBodyLimit::max(limit)),
    )
}
