//! # Inbound Port - FrequencyReportApi
//!
//! Primary driving port used by the API gateway's top-frequency route.

use crate::domain::{FrequencyEntry, ReportError};
use std::num::NonZeroUsize;

/// Top-frequency API.
pub trait FrequencyReportApi: Send + Sync {
    /// Returns at most `count` entries for submissions made within the
    /// trailing window, count descending, ties by number ascending.
    ///
    /// # Errors
    /// - `Store`: the store query failed
    fn top_frequent(&self, count: NonZeroUsize) -> Result<Vec<FrequencyEntry>, ReportError>;
}
