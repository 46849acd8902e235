//! Interaction Hub server.
//!
//! Loads configuration, sets up tracing, and runs the HTTP server until
//! Ctrl+C or SIGTERM.

use tracing_subscriber::{EnvFilter, fmt};

use hub_core::config::AppConfig;
use hub_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// `HUB_CONFIG` names an explicit file; otherwise `config/default.toml` is
/// layered with `config/<HUB_ENV>.toml`. `HUB__*` variables apply to both.
fn load_configuration() -> Result<AppConfig, AppError> {
    if let Ok(path) = std::env::var("HUB_CONFIG") {
        return AppConfig::from_file(&path);
    }
    let env = std::env::var("HUB_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing. `RUST_LOG` wins over `logging.level`.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        store = %config.store.backend,
        "Starting Interaction Hub"
    );
    hub_api::run_server(config).await
}
