//! CLI command definitions and dispatch.

pub mod config;
pub mod hub;
pub mod import;
pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

use hub_core::config::AppConfig;
use hub_core::error::AppError;
use hub_database::open_store;
use hub_service::HubService;

use crate::output::OutputFormat;

/// Interaction Hub: branded event landing pages
#[derive(Debug, Parser)]
#[command(name = "hub-cli", version, about, long_about = None)]
pub struct Cli {
    /// Path to a configuration file. Without it, `config/default.toml` and
    /// the `HUB_ENV` overlay are loaded.
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Hub management
    Hub(hub::HubArgs),
    /// Import hubs from an exported JSON file
    Import(import::ImportArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config_path = self.config.as_deref();
        match &self.command {
            Commands::Serve(args) => serve::execute(args, config_path).await,
            Commands::Migrate(args) => migrate::execute(args, config_path, self.format).await,
            Commands::Hub(args) => hub::execute(args, config_path, self.format).await,
            Commands::Import(args) => import::execute(args, config_path, self.format).await,
            Commands::Config(args) => config::execute(args, config_path, self.format).await,
        }
    }
}

/// Helper: load configuration from an explicit file or the layered defaults
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig, AppError> {
    match config_path {
        Some(path) => AppConfig::from_file(path),
        None => {
            let env = std::env::var("HUB_ENV").unwrap_or_else(|_| "development".to_string());
            AppConfig::load(&env)
        }
    }
}

/// Helper: open the configured store behind a hub service
pub async fn open_hub_service(config: &AppConfig) -> Result<HubService, AppError> {
    Ok(HubService::new(open_store(config).await?))
}
