//! Shared fixture: a full gateway over an in-memory store on a mock clock.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use ns_01_submission_store::{InMemorySubmissionStore, MockTimeSource, SubmissionStore};
use ns_04_api_gateway::{ApiGatewayService, GatewayConfig};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Mock clock start, in ms.
pub const START_MS: u64 = 1_700_000_000_000;

pub struct TestNode {
    pub router: Router,
    pub clock: Arc<MockTimeSource>,
    pub store: Arc<InMemorySubmissionStore>,
}

impl TestNode {
    pub fn new() -> Self {
        Self::with_config(GatewayConfig::default())
    }

    pub fn with_config(config: GatewayConfig) -> Self {
        let clock = Arc::new(MockTimeSource::new(START_MS));
        let store = Arc::new(InMemorySubmissionStore::new(
            config.store.clone(),
            clock.clone(),
        ));
        let gateway = ApiGatewayService::new(config, store.clone(), clock.clone())
            .expect("valid test config");
        Self {
            router: gateway.router(),
            clock,
            store,
        }
    }

    pub async fn sort(&self, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/SortNumbers")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request");
        self.send(request).await
    }

    pub async fn most_frequent(&self, count: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .uri(format!("/MostFrequentNumbers?count={count}"))
            .body(Body::empty())
            .expect("request");
        self.send(request).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).expect("request");
        self.send(request).await
    }

    pub fn submissions(&self) -> usize {
        self.store.len()
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.expect("infallible");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };
        (status, body)
    }
}

impl Default for TestNode {
    fn default() -> Self {
        Self::new()
    }
}
