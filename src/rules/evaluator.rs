//! Match evaluation.

use serde::{Deserialize, Serialize};

use crate::deck::DeckEntry;

/// Outcome of comparing the two cards of a completed turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// Both slots hold the same identity.
    Match,
    /// The slots hold different identities.
    Mismatch,
}

/// Compare two deck entries by identity.
///
/// Pure; called exactly once per completed two-card turn.
#[must_use]
pub fn evaluate(a: &DeckEntry, b: &DeckEntry) -> MatchOutcome {
    if a.card_id == b.card_id {
        MatchOutcome::Match
    } else {
        MatchOutcome::Mismatch
    }
}
