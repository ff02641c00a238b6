//! Store configuration.

use serde::{Deserialize, Serialize};

/// Submission Store configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Maximum number of submissions held. `None` keeps everything for the
    /// process lifetime.
    pub max_submissions: Option<usize>,
}

impl StoreConfig {
    /// Configuration with a hard capacity.
    pub fn with_capacity(max_submissions: usize) -> Self {
        Self {
            max_submissions: Some(max_submissions),
        }
    }
}
