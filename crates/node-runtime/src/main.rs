//! # Number Service
//!
//! Entry point: load configuration, install logging, serve HTTP until
//! Ctrl+C.

use anyhow::{Context, Result};
use node_runtime::{build_gateway, init_tracing, load_config};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    let config = load_config().context("failed to load configuration")?;
    let gateway = build_gateway(config).context("failed to create gateway")?;

    info!(version = ns_04_api_gateway::VERSION, "Number service is running. Press Ctrl+C to stop.");
    gateway
        .start(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Number service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
