//! API Gateway error types and their HTTP responses.
//!
//! | Variant | Status | Body |
//! |---------|--------|------|
//! | `Validation` | 400 | `{"errors":[{"field","message","location"}]}` |
//! | `BadRequest` | 400 | `{"error": message}` |
//! | `Internal` | 500 | `{"error":"Internal server error"}` |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ns_02_sort_ingest::SortIngestError;
use ns_03_frequency_report::ReportError;
use serde::{Deserialize, Serialize};
use shared_types::Classify;
use tracing::error;

/// Client-facing validation messages.
pub mod messages {
    pub const NUMBERS_NOT_ARRAY: &str = "The numbers field must be a non-empty array.";
    pub const NUMBERS_NOT_NUMERIC: &str = "All elements in the numbers array must be numbers.";
    pub const FILTER_TYPE_INVALID: &str =
        "The filterType must be one of the following: <, >, =.";
    pub const FILTER_VALUE_INVALID: &str = "The filterValue must be a number.";
    pub const FILTER_VALUE_REQUIRED: &str =
        "If filterType is provided, filterValue must also be provided.";
    pub const COUNT_INVALID: &str = "The count parameter must be a positive integer.";
    pub const INTERNAL: &str = "Internal server error";

    /// Message reported for an invalid `field`.
    pub fn for_field(field: &str) -> &'static str {
        match field {
            "numbers" => NUMBERS_NOT_ARRAY,
            "filterType" => FILTER_TYPE_INVALID,
            "filterValue" => FILTER_VALUE_INVALID,
            "count" => COUNT_INVALID,
            _ => "Invalid value.",
        }
    }
}

/// Where an invalid field was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldLocation {
    Body,
    Query,
}

/// One invalid request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    pub location: FieldLocation,
}

impl FieldError {
    pub fn body(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            location: FieldLocation::Body,
        }
    }

    pub fn query(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            location: FieldLocation::Query,
        }
    }
}

/// Error returned from a route handler.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// One or more fields failed validation.
    #[error("validation failed: {} invalid field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// The request is malformed as a whole.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Unexpected failure. The detail is logged, never returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Single invalid body field
    pub fn invalid_field(field: &str, message: &str) -> Self {
        Self::Validation(vec![FieldError::body(field, message)])
    }

    /// Body could not be parsed as JSON
    pub fn malformed_body(details: impl std::fmt::Display) -> Self {
        Self::BadRequest(format!("Invalid JSON body: {}", details))
    }

    pub fn internal(details: impl Into<String>) -> Self {
        Self::Internal(details.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Response body for this error.
    pub fn body(&self) -> serde_json::Value {
        match self {
            Self::Validation(errors) => serde_json::json!({ "errors": errors }),
            Self::BadRequest(message) => serde_json::json!({ "error": message }),
            Self::Internal(_) => serde_json::json!({ "error": messages::INTERNAL }),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(details) = &self {
            error!(error = %details, "Request failed with internal error");
        }
        (self.status(), Json(self.body())).into_response()
    }
}

/// Maps a crate error by its classification. Client errors that name a
/// field become a single-field validation error at `location`; internal
/// errors keep their detail for the log only.
fn classified<E>(e: &E, field: Option<&'static str>, location: FieldLocation) -> ApiError
where
    E: Classify + std::fmt::Display,
{
    if !e.kind().is_client_error() {
        return ApiError::internal(e.to_string());
    }
    match field {
        Some(field) => ApiError::Validation(vec![FieldError {
            field: field.to_string(),
            message: messages::for_field(field).to_string(),
            location,
        }]),
        None => ApiError::BadRequest(e.to_string()),
    }
}

impl From<SortIngestError> for ApiError {
    fn from(e: SortIngestError) -> Self {
        // Reported as a request-level error, not a field error.
        if let SortIngestError::MissingFilterValue { .. } = e {
            return ApiError::BadRequest(messages::FILTER_VALUE_REQUIRED.to_string());
        }
        classified(&e, e.field(), FieldLocation::Body)
    }
}

impl From<ReportError> for ApiError {
    fn from(e: ReportError) -> Self {
        classified(&e, e.field(), FieldLocation::Query)
    }
}

/// Result type for route handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Gateway-level errors (not returned to clients)
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Server socket bind error
    #[error("server bind error: {0}")]
    Bind(String),

    /// Server stopped with an I/O error
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}
