//! Deck construction.
//!
//! A deck is built by sampling distinct identities from the catalog
//! (uniformly, without replacement), then laying out each identity
//! twice. The result is unshuffled; pass it through
//! [`shuffle`](crate::deck::shuffle::shuffle) before play.

use serde::{Deserialize, Serialize};

use crate::cards::{CardCatalog, CardId};
use crate::core::GameRng;
use crate::error::EngineError;

/// One physical card slot in a deck, bound to a card identity.
///
/// `position` is the slot's index in the deck. It is provisional until
/// the deck is shuffled, and fixed for the round afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeckEntry {
    /// Index of this slot in the deck.
    pub position: usize,

    /// The identity bound to this slot.
    pub card_id: CardId,
}

impl DeckEntry {
    /// Create a new deck entry.
    #[must_use]
    pub const fn new(position: usize, card_id: CardId) -> Self {
        Self { position, card_id }
    }
}

/// Build an unshuffled deck of `2 * pair_count` entries.
///
/// Samples `pair_count` distinct identities from the catalog, lays them
/// out once, then repeats the run, so entry `i` and entry
/// `i + pair_count` share an identity. Positions are assigned
/// `0..2 * pair_count` in layout order.
///
/// ## Errors
///
/// - [`EngineError::InvalidPairCount`] if `pair_count` is zero.
/// - [`EngineError::InsufficientCards`] if the catalog holds fewer
///   identities than `pair_count`.
pub fn build_deck(
    catalog: &CardCatalog,
    pair_count: usize,
    rng: &mut GameRng,
) -> Result<Vec<DeckEntry>, EngineError> {
    if pair_count == 0 {
        return Err(EngineError::InvalidPairCount);
    }
    if catalog.len() < pair_count {
        return Err(EngineError::InsufficientCards {
            available: catalog.len(),
            requested: pair_count,
        });
    }

    let ids = catalog.ids();
    let selected: Vec<CardId> = rng
        .sample_distinct(ids.len(), pair_count)
        .into_iter()
        .map(|i| ids[i])
        .collect();

    let deck = selected
        .iter()
        .chain(selected.iter())
        .enumerate()
        .map(|(position, &card_id)| DeckEntry::new(position, card_id))
        .collect();

    Ok(deck)
}
