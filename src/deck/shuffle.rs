//! Uniform deck shuffling.

use crate::core::GameRng;

use super::builder::DeckEntry;

/// Produce a uniformly shuffled copy of `entries`.
///
/// The input is not mutated. Every ordering of the returned deck is
/// equally likely (Fisher-Yates). Positions are reassigned `0..n` in the
/// returned order and are final for the round.
#[must_use]
pub fn shuffle(entries: &[DeckEntry], rng: &mut GameRng) -> Vec<DeckEntry> {
    let mut shuffled = entries.to_vec();
    rng.shuffle(&mut shuffled);

    for (position, entry) in shuffled.iter_mut().enumerate() {
        entry.position = position;
    }
    shuffled
}
