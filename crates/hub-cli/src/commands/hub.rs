//! Hub management CLI commands.

use clap::{Args, Subcommand};
use dialoguer::Confirm;
use serde::Serialize;
use tabled::Tabled;

use hub_core::error::AppError;
use hub_entity::Hub;

use crate::output::{self, OutputFormat};

/// Arguments for hub commands
#[derive(Debug, Args)]
pub struct HubArgs {
    /// Hub subcommand
    #[command(subcommand)]
    pub command: HubCommand,
}

/// Hub subcommands
#[derive(Debug, Subcommand)]
pub enum HubCommand {
    /// List hubs, newest first
    List {
        /// Filter by event name or slug
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Show one hub
    Show {
        /// Hub slug
        slug: String,
    },
    /// Create a hub
    Create {
        /// Event name
        event_name: String,
        /// Explicit slug (derived from the event name otherwise)
        #[arg(short, long)]
        slug: Option<String>,
    },
    /// Make a hub's public page visible
    Publish {
        /// Hub slug
        slug: String,
    },
    /// Hide a hub's public page
    Unpublish {
        /// Hub slug
        slug: String,
    },
    /// Delete a hub
    Delete {
        /// Hub slug
        slug: String,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// Hub display row for table output
#[derive(Debug, Serialize, Tabled)]
struct HubRow {
    /// Slug
    slug: String,
    /// Event name
    event_name: String,
    /// Published
    published: String,
    /// Visible / total blocks
    blocks: String,
    /// Last update
    updated_at: String,
}

impl From<&Hub> for HubRow {
    fn from(hub: &Hub) -> Self {
        Self {
            slug: hub.slug.clone(),
            event_name: hub.event_name.clone(),
            published: if hub.is_published { "yes" } else { "no" }.to_string(),
            blocks: format!("{}/{}", hub.visible_blocks().count(), hub.blocks.len()),
            updated_at: hub.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute hub commands
pub async fn execute(
    args: &HubArgs,
    config_path: Option<&str>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let service = super::open_hub_service(&config).await?;

    match &args.command {
        HubCommand::List { query } => {
            let hubs = service.list(query.as_deref()).await?;
            let rows: Vec<HubRow> = hubs.iter().map(HubRow::from).collect();
            output::print_list(&rows, format);
        }
        HubCommand::Show { slug } => {
            let hub = service.get(slug).await?;
            print_hub(&hub, format);
        }
        HubCommand::Create { event_name, slug } => {
            let mut body = serde_json::json!({ "eventName": event_name });
            if let Some(slug) = slug {
                body["slug"] = serde_json::Value::String(slug.clone());
            }
            let hub = service.create(&body).await?;
            output::print_success(&format!("Hub '{}' created", hub.slug));
        }
        HubCommand::Publish { slug } => {
            service.set_published(slug, true).await?;
            output::print_success(&format!("Hub '{slug}' published"));
        }
        HubCommand::Unpublish { slug } => {
            service.set_published(slug, false).await?;
            output::print_success(&format!("Hub '{slug}' unpublished"));
        }
        HubCommand::Delete { slug, force } => {
            if !force {
                let confirm = Confirm::new()
                    .with_prompt(format!("Delete hub '{slug}' and all its blocks?"))
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            service.delete(slug).await?;
            output::print_success(&format!("Hub '{slug}' deleted"));
        }
    }

    Ok(())
}

fn print_hub(hub: &Hub, format: OutputFormat) {
    if format == OutputFormat::Json {
        output::print_json(hub);
        return;
    }

    output::print_kv("Slug", &hub.slug);
    output::print_kv("Event name", &hub.event_name);
    output::print_kv("Published", if hub.is_published { "yes" } else { "no" });
    output::print_kv("Block color", &hub.block_color);
    output::print_kv("Background", &hub.background_color);
    output::print_kv("Fonts", &format!("{} / {}", hub.header_font, hub.body_font));
    let sections: Vec<String> = hub.section_order.iter().map(ToString::to_string).collect();
    output::print_kv("Sections", &sections.join(" → "));
    output::print_kv("Social links", &hub.social_links.len().to_string());
    output::print_kv("Updated", &hub.updated_at.to_rfc3339());

    println!();
    for block in &hub.blocks {
        let hidden = if block.is_visible { "" } else { " (hidden)" };
        println!(
            "  {:>2}. [{}] {}{} → {}",
            block.sort_order, block.aspect_ratio, block.title, hidden, block.url
        );
    }
}
