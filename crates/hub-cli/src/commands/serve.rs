//! Server start command.

use clap::Args;

use hub_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override bind host
    #[arg(long)]
    pub host: Option<String>,

    /// Override bind port
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Start the HTTP server in the foreground
pub async fn execute(args: &ServeArgs, config_path: Option<&str>) -> Result<(), AppError> {
    let mut config = super::load_config(config_path)?;

    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    println!("Starting Interaction Hub on {}", config.server.bind_address());
    hub_api::run_server(config).await
}
