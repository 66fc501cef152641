//! Mismatch-reset scheduling.
//!
//! The engine owns no clock and never sleeps. When a turn resolves as a
//! mismatch, the session mints a `ResetTicket` and leaves both cards
//! face-up; the host runs the configured delay and hands the ticket back
//! via [`GameSession::resolve_mismatch`](crate::session::GameSession::resolve_mismatch).
//!
//! A ticket is valid only for the exact pending reset it was minted for.
//! Starting a new round supersedes it, so a timer that outlives its
//! round finds its ticket stale and cannot touch the replacement state.
//! Cancellation is structural rather than cooperative: there is nothing
//! the host has to remember to tear down.

use serde::{Deserialize, Serialize};

/// Claim on a pending mismatch reset.
///
/// Minted by the session when a mismatch is scheduled for hiding;
/// redeemed by the host when its delay fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResetTicket {
    round: u64,
    attempt: u32,
}

impl ResetTicket {
    pub(crate) fn new(round: u64, attempt: u32) -> Self {
        Self { round, attempt }
    }

    /// The round generation this ticket belongs to.
    #[must_use]
    pub fn round(&self) -> u64 {
        self.round
    }

    /// The attempt whose mismatch this ticket resolves.
    #[must_use]
    pub fn attempt(&self) -> u32 {
        self.attempt
    }
}
