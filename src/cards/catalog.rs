//! Card catalog for definition lookup.
//!
//! The `CardCatalog` stores the card identities a host supplies at
//! session start. Insertion order is preserved: deck construction
//! samples identities by index, so iteration must be stable for a given
//! catalog regardless of hash state.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId};

/// Registry of card definitions with stable insertion order.
///
/// ## Example
///
/// ```
/// use pelmanism::cards::{CardCatalog, CardDefinition, CardId};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(CardDefinition::new(CardId::new(1), "Haaland"));
///
/// let found = catalog.get(CardId::new(1)).unwrap();
/// assert_eq!(found.name, "Haaland");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, CardDefinition>,
    order: Vec<CardId>,
    next_id: u32,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog from definitions, preserving their order.
    #[must_use]
    pub fn from_definitions(definitions: impl IntoIterator<Item = CardDefinition>) -> Self {
        let mut catalog = Self::new();
        for def in definitions {
            catalog.register(def);
        }
        catalog
    }

    /// The six-card roster the engine originally shipped with.
    ///
    /// Handy for demos and tests; real hosts register their own cards.
    #[must_use]
    pub fn demo() -> Self {
        let mut catalog = Self::new();
        for name in ["Auba", "Messi", "Ronaldo", "Mbappe", "Neymar", "Haaland"] {
            catalog.register_auto(name);
        }
        catalog
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.id) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        self.next_id = self.next_id.max(card.id.raw() + 1);
        self.order.push(card.id);
        self.cards.insert(card.id, card);
    }

    /// Register a card with an auto-assigned ID.
    ///
    /// Returns the assigned ID.
    pub fn register_auto(&mut self, name: impl Into<String>) -> CardId {
        let id = CardId::new(self.next_id);
        self.register(CardDefinition::new(id, name));
        id
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Card IDs in registration order.
    #[must_use]
    pub fn ids(&self) -> &[CardId] {
        &self.order
    }

    /// Iterate over all card definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.order.iter().map(|id| &self.cards[id])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut catalog = CardCatalog::new();

        catalog.register(CardDefinition::new(CardId::new(1), "Test Card"));

        let found = catalog.get(CardId::new(1));
        assert!(found.is_some());
        assert_eq!(found.unwrap().name, "Test Card");

        assert!(catalog.get(CardId::new(99)).is_none());
    }

    #[test]
    fn test_register_auto() {
        let mut catalog = CardCatalog::new();

        let id1 = catalog.register_auto("Card A");
        let id2 = catalog.register_auto("Card B");

        assert_eq!(id1, CardId::new(0));
        assert_eq!(id2, CardId::new(1));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_register_auto_after_explicit_id() {
        let mut catalog = CardCatalog::new();

        catalog.register(CardDefinition::new(CardId::new(7), "Explicit"));
        let id = catalog.register_auto("Auto");

        assert_eq!(id, CardId::new(8));
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let mut catalog = CardCatalog::new();

        catalog.register(CardDefinition::new(CardId::new(1), "Card A"));
        catalog.register(CardDefinition::new(CardId::new(1), "Card B")); // Should panic
    }

    #[test]
    fn test_insertion_order_is_stable() {
        let mut catalog = CardCatalog::new();

        catalog.register(CardDefinition::new(CardId::new(3), "C"));
        catalog.register(CardDefinition::new(CardId::new(1), "A"));
        catalog.register(CardDefinition::new(CardId::new(2), "B"));

        let ids: Vec<_> = catalog.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![CardId::new(3), CardId::new(1), CardId::new(2)]);
        assert_eq!(catalog.ids(), &[CardId::new(3), CardId::new(1), CardId::new(2)]);
    }

    #[test]
    fn test_demo_roster() {
        let catalog = CardCatalog::demo();

        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.get(CardId::new(1)).unwrap().name, "Messi");
    }

    #[test]
    fn test_from_definitions() {
        let catalog = CardCatalog::from_definitions(vec![
            CardDefinition::new(CardId::new(0), "A"),
            CardDefinition::new(CardId::new(1), "B"),
        ]);

        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains(CardId::new(0)));
        assert!(catalog.contains(CardId::new(1)));
    }
}
