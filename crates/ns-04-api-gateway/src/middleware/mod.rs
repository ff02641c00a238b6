//! Middleware stack for the API Gateway.
//!
//! Layer order: Request → CORS → Tracing → Body limit → Handler

pub mod cors;
pub mod metrics;
pub mod tracing;

pub use cors::create_cors_layer;
pub use metrics::{Endpoint, GatewayMetrics, RequestTimer};
pub use tracing::TracingLayer;
