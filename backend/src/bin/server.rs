//! Wave dashboard HTTP server binary.
//!
//! Loads the buoy dataset once, cleans it, and serves the dashboard.
//! Any failure before the listener is bound stops the process: the server
//! never serves a partially initialized dashboard.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin wave-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 127.0.0.1, or `server.host` from config)
//! - `PORT`: Server port (default: 8050, or `server.port` from config)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use wave_rose::config::DashboardConfig;
use wave_rose::http::{create_router, AppState};
use wave_rose::ingest::source_for;
use wave_rose::services;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting wave dashboard server");

    let config = DashboardConfig::load()?;
    config.validate()?;
    info!(
        sites = config.sites.allowed.len(),
        default_site = %config.sites.default,
        height_bins = config.bins.count(),
        "Configuration loaded"
    );

    let source = source_for(&config.data.source);
    info!("Fetching dataset from {}", source.describe());
    let dataset = source.load(&config.sites.allowed).await?;

    let table = services::load_and_clean(dataset.records, &config.sites.allowed)?;
    info!(
        rows = table.len(),
        sites_with_data = table.sites().len(),
        checksum = %dataset.checksum,
        "Dataset ready"
    );

    // Initial view for the default selection.
    let initial = services::build_dashboard(&table, &config.sites.default, &config);
    match &initial.message {
        Some(message) => info!(site = %initial.site, "{}", message),
        None => info!(
            site = %initial.site,
            rose_rows = initial.rose.len(),
            "Initial dashboard computed"
        ),
    }

    let addr: SocketAddr = config.bind_address().parse()?;
    let state = AppState::new(table, config, dataset.checksum);
    let app = create_router(state);

    info!("Dashboard available at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
