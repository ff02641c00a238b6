//! Port definitions for the Frequency Report.

pub mod inbound;

pub use inbound::FrequencyReportApi;
