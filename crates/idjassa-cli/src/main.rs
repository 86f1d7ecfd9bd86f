//! I-Djassa CLI - browse listings and manage appointments from a terminal.
//!
//! The session obtained with `idjassa login` is kept in the user cache
//! directory and reused by later commands until `idjassa logout`.

mod commands;
mod listing;

use std::io;
use std::sync::Arc;

use anyhow::Result;
use idjassa_core::{Config, FileStorage, SessionStore};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::Command;

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("{}\n\n{}", message, commands::USAGE);
            std::process::exit(2);
        }
    };

    let mut config = Config::load()?;
    let storage = FileStorage::new(config.session_dir()?);
    let session = SessionStore::new(Arc::new(storage));
    let client = config.build_client(session)?;
    info!(api_url = %client.base_url(), "I-Djassa CLI starting");

    if let Err(e) = commands::run(command, &client, &mut config).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    Ok(())
}
