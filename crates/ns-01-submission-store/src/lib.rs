//! # Submission Store (ns-01)
//!
//! The Submission Store is the only state in the number service. It keeps an
//! append-only log of every accepted numbers array together with the time it
//! arrived, for the lifetime of the process.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | 1 | Sequential Ids | `domain/log.rs` - `append()` assigns `next_id` under the write lock |
//! | 2 | Raw History | `append()` stores the input untouched; nothing mutates a record |
//! | 3 | No Partial Reads | `adapters/memory.rs` - readers clone a snapshot under the read lock |
//! | 4 | Strict Window | `query_after()` keeps `submitted_at > threshold` only |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - `SubmissionLog`, `StoreConfig`, `StoreError`
//! - `ports/` - `SubmissionStore` (inbound), `TimeSource` (outbound)
//! - `adapters/` - `InMemorySubmissionStore`, `SystemTimeSource`, `MockTimeSource`
//!
//! ## Usage
//!
//! ```ignore
//! use ns_01_submission_store::{InMemorySubmissionStore, SubmissionStore};
//!
//! let store = InMemorySubmissionStore::with_system_time(StoreConfig::default());
//! let submission = store.append(numbers)?;
//! let recent = store.query_after(threshold)?;
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::{InMemorySubmissionStore, MockTimeSource, SystemTimeSource};
pub use domain::{StoreConfig, StoreError, SubmissionLog};
pub use ports::{SubmissionStore, TimeSource};
