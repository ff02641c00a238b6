//! Port definitions for the Submission Store.

pub mod inbound;
pub mod outbound;

pub use inbound::SubmissionStore;
pub use outbound::TimeSource;
