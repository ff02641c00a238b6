//! # Inbound Port - SortIngestApi
//!
//! Primary driving port used by the API gateway's submit-and-sort route.

use crate::domain::{RawFilter, SortIngestError};
use shared_types::Number;

/// Submit-and-sort API.
pub trait SortIngestApi: Send + Sync {
    /// Stores `numbers` unfiltered, then returns them filtered and sorted
    /// ascending.
    ///
    /// An empty result after filtering is a success.
    ///
    /// # Errors
    /// - `EmptyNumbers`: `numbers` is empty
    /// - `UnknownOperator`: operator is not `<`, `>` or `=`
    /// - `MissingFilterValue`: operator given without a value
    /// - `Store`: the append failed; nothing is returned
    fn process(
        &self,
        numbers: Vec<Number>,
        filter: &RawFilter,
    ) -> Result<Vec<Number>, SortIngestError>;
}
