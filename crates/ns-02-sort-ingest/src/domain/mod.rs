//! Domain layer for Ingest-and-Sort.

pub mod errors;
pub mod filter;
pub mod merge_sort;

pub use errors::SortIngestError;
pub use filter::{FilterOperator, FilterSpec, RawFilter};
pub use merge_sort::merge_sort;
