//! NS-04 API Gateway - HTTP interface for the number service.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    API GATEWAY (ns-04)                   │
//! ├──────────────────────────────────────────────────────────┤
//! │  CORS → Tracing → Body limit                             │
//! │                       │                                  │
//! │        ┌──────────────┴───────────────┐                  │
//! │  POST /SortNumbers          GET /MostFrequentNumbers     │
//! │        │                              │                  │
//! └────────┼──────────────────────────────┼──────────────────┘
//!          ▼                              ▼
//!   ns-02-sort-ingest          ns-03-frequency-report
//!          │                              │
//!          └────────────┬─────────────────┘
//!                       ▼
//!             ns-01-submission-store
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use ns_04_api_gateway::{ApiGatewayService, GatewayConfig};
//!
//! let clock = Arc::new(SystemTimeSource);
//! let store = Arc::new(InMemorySubmissionStore::new(config.store.clone(), clock.clone()));
//! let gateway = ApiGatewayService::new(config, store, clock)?;
//! gateway.start(shutdown_signal()).await?;
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod middleware;
pub mod router;
pub mod service;

pub use domain::config::{ConfigError, CorsConfig, GatewayConfig, HttpConfig, LimitsConfig};
pub use domain::error::{ApiError, GatewayError};
pub use middleware::GatewayMetrics;
pub use router::{build_router, AppState};
pub use service::ApiGatewayService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
