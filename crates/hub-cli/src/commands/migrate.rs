//! Database migration management commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use hub_core::config::StoreBackend;
use hub_core::error::AppError;
use hub_database::DatabasePool;
use hub_database::migration::{migration_status, run_migrations};

use crate::output::{self, OutputFormat};

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
    /// Show migration status
    Status,
}

/// Migration display row for table output
#[derive(Debug, Serialize, Tabled)]
struct MigrationRow {
    /// Version
    version: i64,
    /// Description
    description: String,
    /// Applied or pending
    status: String,
}

/// Execute migration commands
pub async fn execute(
    args: &MigrateArgs,
    config_path: Option<&str>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    if config.store.backend != StoreBackend::Postgres {
        output::print_warning("store.backend is not \"postgres\"; migrating the configured database anyway");
    }
    let db = DatabasePool::connect(&config.database).await?;

    match &args.command {
        MigrateCommand::Run => {
            println!("Running database migrations...");
            run_migrations(db.pool()).await?;
            output::print_success("All migrations applied successfully.");
        }
        MigrateCommand::Status => {
            let rows: Vec<MigrationRow> = migration_status(db.pool())
                .await?
                .into_iter()
                .map(|m| MigrationRow {
                    version: m.version,
                    description: m.description,
                    status: if m.applied { "applied" } else { "pending" }.to_string(),
                })
                .collect();
            output::print_list(&rows, format);
        }
    }

    db.close().await;
    Ok(())
}
