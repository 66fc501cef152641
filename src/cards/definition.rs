//! Card definitions - static card identities.
//!
//! `CardDefinition` holds the immutable identity of a card: an opaque id
//! and a display name. Everything that changes during play (face-up,
//! matched) lives in the game state, keyed by `CardId`.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card identity.
///
/// This identifies the "kind" of card (e.g., "Messi"), not one of the
/// two physical slots it occupies in a shuffled deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card identity.
///
/// ## Example
///
/// ```
/// use pelmanism::cards::{CardDefinition, CardId};
///
/// let card = CardDefinition::new(CardId::new(1), "Messi");
/// assert_eq!(card.name, "Messi");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card identity.
    pub id: CardId,

    /// Display name (for the host's renderer).
    pub name: String,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
