//! Port definitions for Ingest-and-Sort.

pub mod inbound;

pub use inbound::SortIngestApi;
