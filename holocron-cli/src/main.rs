//! holocron CLI - catalogue API server entry point
//!
//! Usage:
//!   holocron serve                    # Serve on 0.0.0.0:3000
//!   holocron --debug serve -p 8080    # Debug logging, custom port
//!   RUST_LOG=holocron_server=debug holocron serve

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "holocron",
    author,
    version,
    about = "HTTP API for the holocron catalogue - characters, planets, and favorites"
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present; a missing file is not an error
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    tracing_setup::init_tracing(&tracing_setup::TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
    }
}
