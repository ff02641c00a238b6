//! Ingest-and-Sort error types.

use ns_01_submission_store::StoreError;
use shared_types::{Classify, ErrorKind};
use thiserror::Error;

/// Errors raised while ingesting and sorting a submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortIngestError {
    /// The numbers array was empty.
    #[error("numbers must be a non-empty array")]
    EmptyNumbers,

    /// A filter operator was supplied without a value to compare against.
    #[error("filter operator `{operator}` requires a filter value")]
    MissingFilterValue { operator: String },

    /// The filter operator is not one of `<`, `>`, `=`.
    #[error("unrecognized filter operator `{0}`")]
    UnknownOperator(String),

    /// The store rejected the append.
    #[error("failed to store submission: {0}")]
    Store(#[from] StoreError),
}

impl SortIngestError {
    /// Name of the offending request field for argument errors.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::EmptyNumbers => Some("numbers"),
            Self::MissingFilterValue { .. } => Some("filterValue"),
            Self::UnknownOperator(_) => Some("filterType"),
            Self::Store(_) => None,
        }
    }
}

impl Classify for SortIngestError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::Store(e) => e.kind(),
            _ => ErrorKind::InvalidArgument,
        }
    }
}
