//! Import hubs from exported JSON.

use clap::Args;

use hub_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for the import command
#[derive(Debug, Args)]
pub struct ImportArgs {
    /// JSON file holding one hub or an array of hubs (legacy exports accepted)
    pub file: String,

    /// Replace hubs whose slug already exists
    #[arg(long)]
    pub overwrite: bool,
}

/// Execute the import command
pub async fn execute(
    args: &ImportArgs,
    config_path: Option<&str>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let service = super::open_hub_service(&config).await?;

    let raw = tokio::fs::read_to_string(&args.file).await?;
    let document: serde_json::Value = serde_json::from_str(&raw)?;
    let report = service.import(&document, args.overwrite).await?;

    if format == OutputFormat::Json {
        output::print_json(&report);
        return Ok(());
    }

    output::print_success(&format!("Imported from '{}'", args.file));
    output::print_kv("Created", &report.created.join(", "));
    output::print_kv("Replaced", &report.replaced.join(", "));
    if !report.skipped.is_empty() {
        output::print_warning(&format!(
            "Skipped existing: {} (use --overwrite to replace)",
            report.skipped.join(", ")
        ));
    }
    Ok(())
}
