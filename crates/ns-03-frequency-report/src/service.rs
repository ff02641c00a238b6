//! Frequency Report service - implements [`FrequencyReportApi`] over a
//! [`SubmissionStore`].

use crate::domain::{FrequencyEntry, FrequencyTable, ReportConfig, ReportError};
use crate::ports::FrequencyReportApi;
use ns_01_submission_store::{SubmissionStore, TimeSource};
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::{debug, error};

/// Application service for the top-frequency report.
pub struct FrequencyReportService {
    store: Arc<dyn SubmissionStore>,
    time_source: Arc<dyn TimeSource>,
    config: ReportConfig,
}

impl FrequencyReportService {
    /// `time_source` must be the clock that stamps the store's submissions.
    pub fn new(
        store: Arc<dyn SubmissionStore>,
        time_source: Arc<dyn TimeSource>,
        config: ReportConfig,
    ) -> Self {
        Self {
            store,
            time_source,
            config,
        }
    }
}

impl FrequencyReportApi for FrequencyReportService {
    fn top_frequent(&self, count: NonZeroUsize) -> Result<Vec<FrequencyEntry>, ReportError> {
        let now = self.time_source.now();
        let threshold = now.saturating_sub(self.config.window_ms());

        let recent = self.store.query_after(threshold).map_err(|e| {
            error!(error = %e, "Submission store query failed");
            ReportError::from(e)
        })?;

        let table = FrequencyTable::from_submissions(&recent);
        let top = table.top(count.get());

        debug!(
            threshold,
            submissions = recent.len(),
            distinct = table.distinct(),
            returned = top.len(),
            "Built frequency report"
        );
        Ok(top)
    }
}
