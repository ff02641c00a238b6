//! # Ingest-and-Sort (ns-02)
//!
//! Accepts a non-empty numbers array with an optional comparison filter,
//! records the raw array in the Submission Store, and returns the filtered
//! array sorted ascending.
//!
//! ## Processing Pipeline
//!
//! ```text
//! numbers + RawFilter
//!        │
//!        ▼
//!   [validate] ── InvalidArgument ──→ rejected, nothing stored
//!        │
//!        ▼
//!   [append raw numbers] ── store fault ──→ Internal
//!        │
//!        ▼
//!   [filter: <, >, =]  (working set may be empty)
//!        │
//!        ▼
//!   [stable merge sort]
//!        │
//!        ▼
//!   sorted working set
//! ```
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | 1 | Raw History | `service.rs` - `append()` receives the unfiltered input |
//! | 2 | Validate Before Persist | `service.rs` - filter parsed before `append()` |
//! | 3 | Stable Sort | `domain/merge_sort.rs` - left head wins ties |
//! | 4 | Operator Requires Value | `domain/filter.rs` - `FilterSpec::from_parts()` |

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::{merge_sort, FilterOperator, FilterSpec, RawFilter, SortIngestError};
pub use ports::SortIngestApi;
pub use service::SortIngestService;
