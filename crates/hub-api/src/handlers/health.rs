//! Health check handler.

use axum::Json;
use axum::extract::State;

use hub_core::result::AppResult;

use crate::dto::response::{ComponentHealth, HealthChecks, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = component(
        state.hub_service.store().backend().to_string(),
        state.hub_service.health().await,
    );
    let provider = state.upload_service.provider();
    let storage = component(
        provider.provider_type().to_string(),
        provider.health_check().await,
    );

    let status = if store.status == "ok" && storage.status == "ok" {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { store, storage },
    })
}

fn component(backend: String, result: AppResult<bool>) -> ComponentHealth {
    let (status, message) = match result {
        Ok(true) => ("ok", None),
        Ok(false) => ("error", Some("unreachable".to_string())),
        Err(e) => ("error", Some(e.message)),
    };
    ComponentHealth {
        status: status.to_string(),
        backend,
        message,
    }
}
