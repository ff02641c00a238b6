//! # Node Runtime Library
//!
//! Startup pieces of the `number-service` binary, exposed for testing.

pub mod config;

pub use config::{load_config, load_config_from, ConfigLoadError};

use std::sync::Arc;

use ns_01_submission_store::{InMemorySubmissionStore, SystemTimeSource};
use ns_04_api_gateway::{ApiGatewayService, GatewayConfig, GatewayError};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Install the global `fmt` subscriber. `RUST_LOG` overrides the default
/// `info` level.
pub fn init_tracing() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
}

/// Build the gateway over a fresh in-memory store on the system clock.
pub fn build_gateway(config: GatewayConfig) -> Result<ApiGatewayService, GatewayError> {
    let clock = Arc::new(SystemTimeSource);
    let store = Arc::new(InMemorySubmissionStore::new(
        config.store.clone(),
        clock.clone(),
    ));

    info!(
        addr = %config.http_addr(),
        window_secs = config.report.window_secs,
        max_submissions = ?config.store.max_submissions,
        "Creating number service"
    );
    ApiGatewayService::new(config, store, clock)
}
