//! Parsing of the requested report size.

use super::errors::ReportError;
use std::num::NonZeroUsize;

/// Parses the raw `count` parameter.
///
/// Accepts base-10 digits only. Missing, empty, zero, signed, fractional or
/// overflowing values are all `InvalidCount`; a malformed request never turns
/// into an empty or unbounded report.
pub fn parse_count(raw: Option<&str>) -> Result<NonZeroUsize, ReportError> {
    let raw = raw.unwrap_or_default();
    let invalid = || ReportError::InvalidCount {
        raw: raw.to_string(),
    };

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    raw.parse::<NonZeroUsize>().map_err(|_| invalid())
}
