use crate::adapters::time::SystemTimeSource;
use crate::domain::{StoreConfig, StoreError, SubmissionLog};
use crate::ports::{SubmissionStore, TimeSource};
use parking_lot::RwLock;
use shared_types::{Number, Submission, Timestamp};
use std::sync::Arc;
use tracing::{debug, warn};

/// Process-local submission store.
///
/// Appends take the write lock for id assignment, stamping and push as one
/// step. Queries clone a snapshot under the read lock, so a reader never
/// observes a half-written record. History is lost on restart.
pub struct InMemorySubmissionStore {
    log: RwLock<SubmissionLog>,
    time_source: Arc<dyn TimeSource>,
}

impl InMemorySubmissionStore {
    pub fn new(config: StoreConfig, time_source: Arc<dyn TimeSource>) -> Self {
        Self {
            log: RwLock::new(SubmissionLog::new(&config)),
            time_source,
        }
    }

    /// Store stamped by the system clock.
    pub fn with_system_time(config: StoreConfig) -> Self {
        Self::new(config, Arc::new(SystemTimeSource))
    }
}

impl SubmissionStore for InMemorySubmissionStore {
    fn append(&self, numbers: Vec<Number>) -> Result<Submission, StoreError> {
        let mut log = self.log.write();
        let now = self.time_source.now();

        match log.append(numbers, now) {
            Ok(submission) => {
                debug!(
                    id = submission.id,
                    len = submission.numbers.len(),
                    submitted_at = submission.submitted_at,
                    total = log.len(),
                    "Stored submission"
                );
                Ok(submission)
            }
            Err(e) => {
                warn!(error = %e, "Failed to store submission");
                Err(e)
            }
        }
    }

    fn query_after(&self, threshold: Timestamp) -> Result<Vec<Submission>, StoreError> {
        let snapshot = self.log.read().after(threshold);
        debug!(threshold, matched = snapshot.len(), "Queried submissions");
        Ok(snapshot)
    }

    fn len(&self) -> usize {
        self.log.read().len()
    }
}
