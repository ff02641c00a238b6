//! # Inbound Port - SubmissionStore
//!
//! The store API consumed by the sort/ingest service and the frequency
//! report. Both hold it as `Arc<dyn SubmissionStore>`.

use crate::domain::StoreError;
use shared_types::{Number, Submission, Timestamp};

/// Append-only, time-windowed log of number submissions.
///
/// Implementations must make `append` atomic with respect to
/// `query_after`: a reader either sees a whole submission or none of it.
pub trait SubmissionStore: Send + Sync {
    /// Stores a raw numbers array.
    ///
    /// Assigns the next sequential id and stamps the current time. The array
    /// is stored exactly as given; callers pass the unfiltered input.
    ///
    /// # Errors
    /// - `EmptySubmission`: `numbers` is empty
    /// - `CapacityExhausted`: configured capacity reached
    fn append(&self, numbers: Vec<Number>) -> Result<Submission, StoreError>;

    /// Returns all submissions with `submitted_at > threshold`.
    ///
    /// No ordering is guaranteed.
    fn query_after(&self, threshold: Timestamp) -> Result<Vec<Submission>, StoreError>;

    /// Number of submissions held.
    fn len(&self) -> usize;

    /// Returns true if nothing has been stored yet.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
