//! Ingest-and-Sort service - implements [`SortIngestApi`] over a
//! [`SubmissionStore`].

use crate::domain::{merge_sort, RawFilter, SortIngestError};
use crate::ports::SortIngestApi;
use ns_01_submission_store::SubmissionStore;
use shared_types::Number;
use std::sync::Arc;
use tracing::{debug, error};

/// Application service for submit-and-sort.
pub struct SortIngestService {
    store: Arc<dyn SubmissionStore>,
}

impl SortIngestService {
    pub fn new(store: Arc<dyn SubmissionStore>) -> Self {
        Self { store }
    }
}

impl SortIngestApi for SortIngestService {
    fn process(
        &self,
        numbers: Vec<Number>,
        filter: &RawFilter,
    ) -> Result<Vec<Number>, SortIngestError> {
        if numbers.is_empty() {
            return Err(SortIngestError::EmptyNumbers);
        }
        // Reject a bad filter before anything is persisted.
        let filter = filter.validate()?;

        let submission = self.store.append(numbers).map_err(|e| {
            error!(error = %e, "Submission store append failed");
            SortIngestError::from(e)
        })?;

        let working_set = match filter {
            Some(spec) => spec.apply(&submission.numbers),
            None => submission.numbers,
        };
        let sorted = merge_sort(&working_set);

        debug!(
            id = submission.id,
            filter = ?filter.map(|f| f.operator),
            returned = sorted.len(),
            "Processed submission"
        );
        Ok(sorted)
    }
}
