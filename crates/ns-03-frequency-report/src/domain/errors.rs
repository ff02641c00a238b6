//! Frequency Report error types.

use ns_01_submission_store::StoreError;
use shared_types::{Classify, ErrorKind};
use thiserror::Error;

/// Errors raised while building a frequency report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// `count` was missing, zero, negative, fractional or not a number.
    #[error("count must be a positive integer, got {raw:?}")]
    InvalidCount { raw: String },

    /// The store query failed.
    #[error("failed to query submissions: {0}")]
    Store(#[from] StoreError),
}

impl ReportError {
    /// Name of the offending query parameter for argument errors.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidCount { .. } => Some("count"),
            Self::Store(_) => None,
        }
    }
}

impl Classify for ReportError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCount { .. } => ErrorKind::InvalidArgument,
            Self::Store(e) => e.kind(),
        }
    }
}
