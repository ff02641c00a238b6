//! # Adapters Module
//!
//! - `memory`: process-local store guarded by a read/write lock
//! - `time`: system clock and a controllable clock for tests

pub mod memory;
pub mod time;

pub use memory::InMemorySubmissionStore;
pub use time::{MockTimeSource, SystemTimeSource};
