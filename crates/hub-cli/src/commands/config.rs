//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use hub_core::config::{AppConfig, StoreBackend, StorageProviderKind};
use hub_core::error::AppError;
use hub_database::connection::mask_password;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Validate configuration
    Validate,
    /// Write the default configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "config/generated.toml")]
        output: String,
    },
}

/// Execute config commands
pub async fn execute(
    args: &ConfigArgs,
    config_path: Option<&str>,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let mut config = super::load_config(config_path)?;
            config.database.url = mask_password(&config.database.url);
            if !config.storage.s3.secret_key.is_empty() {
                config.storage.s3.secret_key = "****".to_string();
            }
            match format {
                OutputFormat::Json => output::print_json(&config),
                OutputFormat::Table => println!("{config:#?}"),
            }
        }
        ConfigCommand::Validate => match super::load_config(config_path).and_then(check_mounts) {
            Ok(config) => {
                output::print_success("Configuration is valid");
                output::print_kv("Server", &config.server.bind_address());
                output::print_kv("Store", &config.store.backend.to_string());
                match config.store.backend {
                    StoreBackend::File => output::print_kv("Store file", &config.store.file_path),
                    StoreBackend::Postgres => {
                        output::print_kv("Database", &mask_password(&config.database.url))
                    }
                }
                match config.storage.provider {
                    StorageProviderKind::Local => {
                        output::print_kv("Uploads", &config.storage.local.root_path)
                    }
                    StorageProviderKind::S3 => {
                        output::print_kv("Uploads", &format!("s3://{}", config.storage.s3.bucket))
                    }
                }
                output::print_kv(
                    "Max upload",
                    &format!("{} bytes", config.storage.max_upload_size_bytes),
                );
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {e}"));
                return Err(e);
            }
        },
        ConfigCommand::Generate { output: out_path } => {
            let default_config = include_str!("../../../../config/default.toml");

            if let Some(parent) = std::path::Path::new(out_path).parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(out_path, default_config).await?;

            output::print_success(&format!("Default config written to '{out_path}'"));
        }
    }

    Ok(())
}

/// Reject settings that load fine but would fail when the server starts.
fn check_mounts(config: AppConfig) -> Result<AppConfig, AppError> {
    if config.storage.provider == StorageProviderKind::Local {
        config.storage.local.mount_path()?;
    }
    Ok(config)
}
