//! Request metrics.
//!
//! Counters are exposed as JSON on `/metrics`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Which route a request hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    SortNumbers,
    MostFrequent,
}

/// API Gateway metrics
#[derive(Default)]
pub struct GatewayMetrics {
    // Request counters
    pub requests_total: AtomicU64,
    pub requests_success: AtomicU64,
    pub requests_error: AtomicU64,

    // Per-route counters
    pub sort_requests: AtomicU64,
    pub report_requests: AtomicU64,

    // Latency tracking (simplified - in production use histograms)
    pub total_latency_ms: AtomicU64,
    pub request_count_for_latency: AtomicU64,
}

impl GatewayMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a request
    pub fn record_request(&self, endpoint: Endpoint, success: bool, latency_ms: u64) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);

        if success {
            self.requests_success.fetch_add(1, Ordering::Relaxed);
        } else {
            self.requests_error.fetch_add(1, Ordering::Relaxed);
        }

        match endpoint {
            Endpoint::SortNumbers => self.sort_requests.fetch_add(1, Ordering::Relaxed),
            Endpoint::MostFrequent => self.report_requests.fetch_add(1, Ordering::Relaxed),
        };

        self.total_latency_ms
            .fetch_add(latency_ms, Ordering::Relaxed);
        self.request_count_for_latency
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Get average latency in ms
    pub fn average_latency_ms(&self) -> f64 {
        let total = self.total_latency_ms.load(Ordering::Relaxed);
        let count = self.request_count_for_latency.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Export metrics as JSON. `submissions_stored` comes from the store.
    pub fn to_json(&self, submissions_stored: usize) -> serde_json::Value {
        serde_json::json!({
            "requests": {
                "total": self.requests_total.load(Ordering::Relaxed),
                "success": self.requests_success.load(Ordering::Relaxed),
                "error": self.requests_error.load(Ordering::Relaxed),
            },
            "routes": {
                "sort_numbers": self.sort_requests.load(Ordering::Relaxed),
                "most_frequent_numbers": self.report_requests.load(Ordering::Relaxed),
            },
            "store": {
                "submissions": submissions_stored,
            },
            "latency": {
                "average_ms": self.average_latency_ms(),
            }
        })
    }
}

/// Request timing helper
pub struct RequestTimer {
    start: Instant,
    metrics: Arc<GatewayMetrics>,
    endpoint: Endpoint,
}

impl RequestTimer {
    pub fn new(metrics: Arc<GatewayMetrics>, endpoint: Endpoint) -> Self {
        Self {
            start: Instant::now(),
            metrics,
            endpoint,
        }
    }

    pub fn finish(self, success: bool) {
        let latency_ms = self.start.elapsed().as_millis() as u64;
        self.metrics
            .record_request(self.endpoint, success, latency_ms);
    }
}
