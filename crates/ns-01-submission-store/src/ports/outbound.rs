//! Outbound (Driven) ports for the Submission Store.

use shared_types::Timestamp;

/// Time source for consistent timestamp handling.
///
/// Abstracted to allow testing with deterministic time. The frequency report
/// shares the same source so windows line up with stored timestamps.
pub trait TimeSource: Send + Sync {
    /// Returns the current timestamp in milliseconds.
    fn now(&self) -> Timestamp;
}
