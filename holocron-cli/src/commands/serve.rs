//! HTTP server command

use anyhow::{Context, Result};
use clap::Parser;

use holocron_server::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Bind address
    #[arg(long)]
    pub host: Option<String>,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// User id assumed when requests carry no x-user-id header
    #[arg(long)]
    pub default_user: Option<i64>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let mut config = ServerConfig::from_env();

    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(database_url) = args.database_url {
        config.database_url = database_url;
    }
    if let Some(default_user) = args.default_user {
        config.default_user_id = default_user;
    }

    tracing::info!("Starting holocron server on {}:{}", config.host, config.port);

    run_server(config).await.context("Server error")?;

    Ok(())
}
