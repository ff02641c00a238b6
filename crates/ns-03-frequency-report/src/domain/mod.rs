//! Domain layer for the Frequency Report.

pub mod config;
pub mod count;
pub mod errors;
pub mod frequency;

pub use config::ReportConfig;
pub use count::parse_count;
pub use errors::ReportError;
pub use frequency::{FrequencyEntry, FrequencyTable};
