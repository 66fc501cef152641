//! Session configuration.
//!
//! Hosts configure a round here rather than modifying the engine.
//! Defaults match the classic setup: six pairs, one second before a
//! mismatched pair is hidden again.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Pairs dealt per round unless configured otherwise.
pub const DEFAULT_PAIR_COUNT: usize = 6;

/// How long a mismatched pair stays face-up unless configured otherwise.
pub const DEFAULT_MISMATCH_DELAY: Duration = Duration::from_millis(1000);

/// Configuration for a game session.
///
/// ## Example
///
/// ```
/// use pelmanism::core::SessionConfig;
/// use std::time::Duration;
///
/// let config = SessionConfig::new()
///     .with_pair_count(8)
///     .with_mismatch_delay(Duration::from_millis(750));
///
/// assert_eq!(config.pair_count, 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Number of distinct card identities in play; deck size is twice this.
    pub pair_count: usize,

    /// How long the host should leave a mismatched pair face-up before
    /// resolving the reset. The engine never sleeps on this; it is
    /// advisory for the host's timer.
    pub mismatch_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            pair_count: DEFAULT_PAIR_COUNT,
            mismatch_delay: DEFAULT_MISMATCH_DELAY,
        }
    }
}

impl SessionConfig {
    /// Create a configuration with the default setup.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pair count (builder pattern).
    ///
    /// Validated at session construction, not here.
    #[must_use]
    pub fn with_pair_count(mut self, pair_count: usize) -> Self {
        self.pair_count = pair_count;
        self
    }

    /// Set the mismatch delay (builder pattern).
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay = delay;
        self
    }
}
