//! # Error Types
//!
//! Error classification shared by every crate. Each crate keeps its own
//! `thiserror` enum and maps every variant onto an [`ErrorKind`], which the
//! API gateway turns into a response.

use serde::{Deserialize, Serialize};

/// The two failure categories a caller can observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Malformed or missing input. Surfaced to the caller with field detail.
    InvalidArgument,
    /// Unexpected failure behind the API. Logged; the caller gets a generic
    /// failure without internal detail.
    Internal,
}

impl ErrorKind {
    /// Returns true if the error is the caller's fault.
    pub fn is_client_error(self) -> bool {
        matches!(self, ErrorKind::InvalidArgument)
    }
}

/// Implemented by every crate-level error so callers can classify failures
/// without matching on foreign variants.
pub trait Classify {
    /// The category of this error.
    fn kind(&self) -> ErrorKind;
}
