//! # Submission Log
//!
//! Pure, single-threaded append-only log. The adapter layer provides the
//! locking; this type only enforces ordering and capacity.

use super::config::StoreConfig;
use super::errors::StoreError;
use shared_types::{Number, Submission, SubmissionId, Timestamp};

/// Append-only log of submissions in arrival order.
#[derive(Debug, Clone)]
pub struct SubmissionLog {
    submissions: Vec<Submission>,
    next_id: SubmissionId,
    capacity: Option<usize>,
}

impl SubmissionLog {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            submissions: Vec::new(),
            next_id: 1,
            capacity: config.max_submissions,
        }
    }

    /// Appends a raw numbers array stamped with `now`.
    ///
    /// The record is only pushed once every check has passed, so a failed
    /// append leaves the log untouched.
    pub fn append(
        &mut self,
        numbers: Vec<Number>,
        now: Timestamp,
    ) -> Result<Submission, StoreError> {
        if numbers.is_empty() {
            return Err(StoreError::EmptySubmission);
        }
        if let Some(capacity) = self.capacity {
            if self.submissions.len() >= capacity {
                return Err(StoreError::CapacityExhausted { capacity });
            }
        }

        let id = self.next_id;
        let next_id = id.checked_add(1).ok_or(StoreError::IdOverflow)?;

        let submission = Submission {
            id,
            numbers,
            submitted_at: now,
        };
        self.submissions.push(submission.clone());
        self.next_id = next_id;

        Ok(submission)
    }

    /// Returns every submission made strictly after `threshold`.
    pub fn after(&self, threshold: Timestamp) -> Vec<Submission> {
        self.submissions
            .iter()
            .filter(|s| s.is_after(threshold))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.submissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }
}

impl Default for SubmissionLog {
    fn default() -> Self {
        Self::new(&StoreConfig::default())
    }
}
