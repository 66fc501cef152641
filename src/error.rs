//! Engine error types.
//!
//! Only conditions the caller must handle are errors: a catalog too small
//! to deal from, a flip pointing outside the deck, or a prearranged deck
//! that is not made of pairs. In-range anomalies (flipping a face-up
//! card, flipping during a pending reset) are defined no-ops and are
//! reported as [`FlipOutcome::Rejected`](crate::session::FlipOutcome),
//! not errors.

use thiserror::Error;

/// Errors surfaced by the game engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The catalog holds fewer identities than the requested pair count.
    /// Fatal to session start; no state is created.
    #[error("catalog holds {available} card(s) but {requested} pair(s) were requested")]
    InsufficientCards { available: usize, requested: usize },

    /// A round needs at least one pair.
    #[error("pair count must be at least 1")]
    InvalidPairCount,

    /// A flip referenced a position outside the deck.
    #[error("position {position} is out of range for a deck of {deck_len} card(s)")]
    InvalidPosition { position: usize, deck_len: usize },

    /// A prearranged deck did not consist of exact pairs.
    #[error("malformed deck: {reason}")]
    MalformedDeck { reason: String },
}
