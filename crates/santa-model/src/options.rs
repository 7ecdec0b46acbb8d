//! Configuration options for a matching run.

use serde::{Deserialize, Serialize};

/// Number of shuffles tried before a run gives up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

/// Options controlling the retry loop around the matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Maximum number of shuffled attempts (at least 1).
    pub max_attempts: u32,

    /// Seed for the random source. `None` draws a fresh seed per run.
    ///
    /// The seed actually used is reported back so a run can be replayed.
    pub seed: Option<u64>,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
        }
    }
}

impl MatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}
