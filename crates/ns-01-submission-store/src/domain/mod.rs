//! Domain layer for the Submission Store.

pub mod config;
pub mod errors;
pub mod log;

pub use config::StoreConfig;
pub use errors::StoreError;
pub use log::SubmissionLog;
