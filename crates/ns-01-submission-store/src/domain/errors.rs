//! Submission Store error types.

use shared_types::{Classify, ErrorKind};
use thiserror::Error;

/// Errors raised by the Submission Store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The configured capacity is reached. There is no eviction.
    #[error("store capacity exhausted: {capacity} submissions held")]
    CapacityExhausted { capacity: usize },

    /// Attempted to store an empty numbers array.
    #[error("cannot store an empty submission")]
    EmptySubmission,

    /// Submission ids ran out.
    #[error("submission id space exhausted")]
    IdOverflow,
}

impl Classify for StoreError {
    fn kind(&self) -> ErrorKind {
        // Callers validate input before appending, so every store failure is
        // a fault behind the API.
        ErrorKind::Internal
    }
}
