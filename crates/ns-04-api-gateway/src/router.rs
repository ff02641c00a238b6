//! HTTP routes and handlers.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | POST | `/SortNumbers` | submit, filter and sort |
//! | GET | `/MostFrequentNumbers?count=N` | top-N frequency report |
//! | GET | `/health` | liveness |
//! | GET | `/metrics` | request counters as JSON |

use crate::domain::config::GatewayConfig;
use crate::domain::error::{ApiError, ApiResult};
use crate::domain::requests::{FrequencyResponseEntry, SortRequest, SortResponse};
use crate::middleware::{create_cors_layer, Endpoint, GatewayMetrics, RequestTimer, TracingLayer};
use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, Query, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use ns_01_submission_store::SubmissionStore;
use ns_02_sort_ingest::SortIngestApi;
use ns_03_frequency_report::{parse_count, FrequencyReportApi};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub sort: Arc<dyn SortIngestApi>,
    pub report: Arc<dyn FrequencyReportApi>,
    pub store: Arc<dyn SubmissionStore>,
    pub metrics: Arc<GatewayMetrics>,
}

/// Builds the public router with its middleware stack.
///
/// Layers, innermost first: body size limit, tracing, CORS.
pub fn build_router(state: AppState, config: &GatewayConfig) -> Router {
    Router::new()
        .route("/SortNumbers", post(sort_numbers))
        .route("/MostFrequentNumbers", get(most_frequent_numbers))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.limits.max_request_size))
        .layer(TracingLayer::new())
        .layer(create_cors_layer(&config.cors))
        .with_state(state)
}

/// `POST /SortNumbers`
async fn sort_numbers(State(state): State<AppState>, body: Bytes) -> ApiResult<Json<SortResponse>> {
    let timer = RequestTimer::new(Arc::clone(&state.metrics), Endpoint::SortNumbers);
    let result = submit_and_sort(&state, &body);
    timer.finish(result.is_ok());
    result.map(Json)
}

fn submit_and_sort(state: &AppState, body: &[u8]) -> ApiResult<SortResponse> {
    let json = parse_body(body)?;
    let request = SortRequest::from_json(&json)?;
    let sorted_numbers = state.sort.process(request.numbers, &request.filter)?;
    Ok(SortResponse { sorted_numbers })
}

/// An empty body is read as `{}` so that it fails field validation rather
/// than JSON parsing.
fn parse_body(body: &[u8]) -> ApiResult<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    serde_json::from_slice(body).map_err(ApiError::malformed_body)
}

/// `GET /MostFrequentNumbers?count=N`
async fn most_frequent_numbers(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<Vec<FrequencyResponseEntry>>> {
    let timer = RequestTimer::new(Arc::clone(&state.metrics), Endpoint::MostFrequent);
    let result = top_frequent(&state, params.get("count").map(String::as_str));
    timer.finish(result.is_ok());
    result.map(Json)
}

fn top_frequent(
    state: &AppState,
    raw_count: Option<&str>,
) -> ApiResult<Vec<FrequencyResponseEntry>> {
    let count = parse_count(raw_count)?;
    let entries = state.report.top_frequent(count)?;
    Ok(entries.into_iter().map(FrequencyResponseEntry::from).collect())
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "number-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.metrics.to_json(state.store.len()))
}
