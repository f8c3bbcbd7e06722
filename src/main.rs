//! Coffee-shop storefront server.
//!
//! Serves the web front end's route handlers: each one relays the inbound
//! request to the backend service or to the data-access collaborator and
//! maps the result into a JSON response.
//!
//! ```text
//! client ──▶ listener ──▶ router ──▶ relay handler ──▶ backend / db
//!        ◀── envelope ◀── status map ◀── outcome  ◀──
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use coffeeshop_frontend::config::loader::{default_config, load_config};
use coffeeshop_frontend::lifecycle::{shutdown, Shutdown};
use coffeeshop_frontend::observability::{logging, metrics};
use coffeeshop_frontend::HttpServer;

#[derive(Parser)]
#[command(name = "coffeeshop-frontend", version, about = "Coffee-shop storefront server")]
struct Cli {
    /// Path to the TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => default_config()?,
    };

    logging::init_logging(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        backend = %config.backend.base_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let coordinator = Shutdown::new();
    let server_shutdown = coordinator.subscribe();
    tokio::spawn(async move {
        shutdown::ctrl_c().await;
        coordinator.trigger();
    });

    let server = HttpServer::new(config)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
