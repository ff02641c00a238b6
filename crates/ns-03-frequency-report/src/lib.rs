//! # Frequency Report (ns-03)
//!
//! Reports the most frequent numbers across every submission made within a
//! trailing window (5 minutes by default).
//!
//! ## Algorithm
//!
//! ```text
//! now ──(read once)──→ threshold = now - window
//!                          │
//!                          ▼
//!              store.query_after(threshold)
//!                          │
//!                          ▼
//!       FrequencyTable: number → occurrences (by numeric value)
//!                          │
//!                          ▼
//!       rank: count desc, then number asc ──→ truncate to `count`
//! ```
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | 1 | Single Clock Read | `service.rs` - `now()` called once per report |
//! | 2 | Numeric Keys | `domain/frequency.rs` - table keyed by `Number` |
//! | 3 | Deterministic Ties | `domain/frequency.rs` - `ranked()` orders equal counts by number |
//! | 4 | Positive Count | `domain/count.rs` - `parse_count()` |

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::{parse_count, FrequencyEntry, FrequencyTable, ReportConfig, ReportError};
pub use ports::FrequencyReportApi;
pub use service::FrequencyReportService;
