//! backend-ping: connectivity probe server.
//!
//! This is the application entry point. It parses arguments, initializes
//! tracing, loads configuration, builds the router and starts the HTTP server.

use std::path::PathBuf;

use clap::Parser;

use backend_ping::config::AppConfig;
use backend_ping::http::start_server;
use backend_ping::logging;
use backend_ping::routes::create_router;

/// backend-ping: answers GET /test so a frontend can check the backend is up
#[derive(Parser, Debug)]
#[command(name = "backend-ping", version, about)]
struct Args {
    /// Path to an optional configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level filter (e.g., "backend_ping=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Configuration first: the log format lives in it
    let config = AppConfig::load_or_default(args.config.as_ref())?;

    let log_filter = logging::resolve_filter(args.log_level, std::env::var("RUST_LOG").ok());
    logging::init(&log_filter, config.logging.format)?;

    match &args.config {
        Some(path) => tracing::debug!(path = %path.display(), "Loaded configuration"),
        None => tracing::debug!("Using built-in configuration"),
    }

    let app = create_router();

    if let Err(e) = start_server(app, &config).await {
        tracing::error!(error = %e, "Server failed");
        return Err(e.into());
    }

    Ok(())
}
