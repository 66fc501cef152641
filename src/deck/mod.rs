//! Deck construction and shuffling.
//!
//! Construction and permutation are separate routines drawing from
//! separate RNG streams: which identities participate in a round and
//! where their cards land are independently reproducible.

pub mod builder;
pub mod shuffle;

pub use builder::{build_deck, DeckEntry};
pub use shuffle::shuffle;
