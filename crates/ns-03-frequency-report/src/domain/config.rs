//! Report configuration.

use serde::{Deserialize, Serialize};

/// Default trailing window: 5 minutes.
pub const DEFAULT_WINDOW_SECS: u64 = 300;

/// Frequency Report configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Length of the trailing window, in seconds.
    pub window_secs: u64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            window_secs: DEFAULT_WINDOW_SECS,
        }
    }
}

impl ReportConfig {
    /// Window length in milliseconds, matching store timestamps.
    pub fn window_ms(&self) -> u64 {
        self.window_secs.saturating_mul(1000)
    }
}
