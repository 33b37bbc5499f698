//! Labor Data Relay
//!
//! Relays the labor ministry's published violation CSVs to browser clients
//! that cannot fetch them directly because of cross-origin restrictions.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌──────────────────────────────────────────────┐
//!                     │                 LABOR DATA RELAY              │
//!     Browser         │  ┌─────────┐    ┌─────────┐    ┌──────────┐  │
//!     ────────────────┼─▶│  http   │───▶│ sources │───▶│ upstream │──┼──▶ announcement.mol.gov.tw
//!                     │  │ server  │    │  table  │    │  client  │  │
//!     ◀───────────────┼──│+ CORS   │◀───────────────────│          │◀─┼───
//!                     │  └─────────┘                    └──────────┘  │
//!                     │  config · observability · lifecycle           │
//!                     └──────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use labor_data_relay::config::{load_config, validate_config, ConfigError, RelayConfig};
use labor_data_relay::http::HttpServer;
use labor_data_relay::lifecycle::{signals, startup, Shutdown, StartupError};
use labor_data_relay::observability::init_logging;

#[derive(Parser)]
#[command(name = "labor-data-relay")]
#[command(about = "CORS relay for the labor ministry's violation CSV datasets", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address
    #[arg(short, long)]
    bind: Option<String>,

    /// Override observability.log_level
    #[arg(short, long)]
    log_level: Option<String>,
}

fn resolve_config(cli: &Cli) -> Result<RelayConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RelayConfig::default(),
    };

    if let Some(bind) = &cli.bind {
        config.listener.bind_address = bind.clone();
    }
    if let Some(level) = &cli.log_level {
        config.observability.log_level = level.clone();
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    init_logging(&config.observability.log_level);

    tracing::info!("labor-data-relay v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        upstream_timeout_secs = config.upstream.timeout_secs,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let bind_address = config.listener.bind_address.clone();
    let server = HttpServer::new(config)?;

    let listener = TcpListener::bind(&bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            address: bind_address.clone(),
            source,
        })?;
    let local_addr = listener.local_addr()?;

    tracing::info!(address = %local_addr, "Listening for connections");
    startup::announce_endpoints(local_addr, server.sources());

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_listener(&shutdown);

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
