//! # Shared Types Crate
//!
//! This crate contains the domain entities and error classification shared
//! by the store, the sort/ingest service, the frequency report and the
//! API gateway.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `Number` and `Submission` are defined once
//!   here; every other crate reuses them.
//! - **Numeric Identity**: numbers compare, hash and order by value, never by
//!   their textual form. `5` and `5.0` are the same number.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
