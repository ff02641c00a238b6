//! # Frequency Table
//!
//! Occurrence counts keyed by numeric value, and their ranking.

use serde::{Deserialize, Serialize};
use shared_types::{Number, Submission};
use std::cmp::Reverse;
use std::collections::BTreeMap;

/// One ranked number and how often it occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub number: Number,
    /// Always at least 1.
    pub count: u64,
}

/// Occurrence counts across a set of submissions.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: BTreeMap<Number, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every number of every submission.
    pub fn from_submissions<'a>(submissions: impl IntoIterator<Item = &'a Submission>) -> Self {
        let mut table = Self::new();
        for submission in submissions {
            table.record(&submission.numbers);
        }
        table
    }

    pub fn record(&mut self, numbers: &[Number]) {
        for &n in numbers {
            *self.counts.entry(n).or_insert(0) += 1;
        }
    }

    /// Occurrences of `number`, zero if never seen.
    pub fn count_of(&self, number: Number) -> u64 {
        self.counts.get(&number).copied().unwrap_or(0)
    }

    /// Number of distinct values seen.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// All entries, count descending; equal counts ordered by number ascending.
    pub fn ranked(&self) -> Vec<FrequencyEntry> {
        let mut entries: Vec<FrequencyEntry> = self
            .counts
            .iter()
            .map(|(&number, &count)| FrequencyEntry { number, count })
            .collect();
        entries.sort_by_key(|e| (Reverse(e.count), e.number));
        entries
    }

    /// The first `limit` entries of [`ranked`](Self::ranked).
    pub fn top(&self, limit: usize) -> Vec<FrequencyEntry> {
        let mut ranked = self.ranked();
        ranked.truncate(limit);
        ranked
    }
}
