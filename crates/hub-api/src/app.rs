//! Application builder: wires stores, providers, services, and the router
//! into a running server.

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{info, warn};

use hub_core::config::AppConfig;
use hub_core::error::{AppError, ErrorKind};
use hub_core::result::AppResult;
use hub_database::open_store;
use hub_service::{HubService, UploadService, UploadValidator};
use hub_storage::manager::build_provider;

use crate::router::build_router;
use crate::state::AppState;

/// Open the hub store and upload provider, then build the shared state.
pub async fn build_state(config: AppConfig) -> AppResult<AppState> {
    let store = open_store(&config).await?;
    let provider = build_provider(&config.storage).await?;

    let hub_service = Arc::new(HubService::new(store));
    let upload_service = Arc::new(UploadService::new(
        provider,
        UploadValidator::from_config(&config.storage),
    ));

    Ok(AppState {
        config: Arc::new(config),
        hub_service,
        upload_service,
    })
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Bind, serve, and shut down gracefully on Ctrl+C or SIGTERM.
///
/// In-flight requests get `server.shutdown_grace_seconds` to finish.
pub async fn run_server(config: AppConfig) -> AppResult<()> {
    let addr = config.server.bind_address();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);

    let state = build_state(config).await?;
    let app = build_app(state);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e))?;
    info!(address = %addr, "Interaction Hub listening");

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        let _ = shutdown_rx.changed().await;
    });
    let mut server = tokio::spawn(server.into_future());

    tokio::select! {
        result = &mut server => return flatten(result),
        _ = shutdown_signal() => {}
    }

    info!("Shutdown signal received, draining connections");
    let _ = shutdown_tx.send(true);

    match tokio::time::timeout(grace, server).await {
        Ok(result) => flatten(result)?,
        Err(_) => warn!(grace_seconds = grace.as_secs(), "Grace period elapsed, forcing shutdown"),
    }

    info!("Interaction Hub shut down");
    Ok(())
}

fn flatten(result: Result<std::io::Result<()>, tokio::task::JoinError>) -> AppResult<()> {
    match result {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(AppError::with_source(ErrorKind::Internal, "Server error", e)),
        Err(e) => Err(AppError::internal(format!("Server task failed: {e}"))),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
