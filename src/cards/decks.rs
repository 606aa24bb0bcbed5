//! Deck lists and the starter decks.
//!
//! A `DeckList` is static input data: a faction and its cards. It is
//! dealt once per match into a `Hand`; there is no draw mechanic, so the
//! dealt cards are all a player will ever have.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::{Card, Faction};
use super::instance::CardInstance;
use crate::core::entity::EntityAllocator;
use crate::core::player::PlayerId;

/// A faction's card list.
///
/// ## Example
///
/// ```
/// use rust_gwent::cards::{Card, DeckList, Faction};
///
/// let deck = DeckList::new(Faction::Nilfgaard)
///     .with_card(Card::melee("Black Infantry Archer", 10))
///     .with_card(Card::siege("Heavy Zerrikanian Fire Scorpion", 10));
///
/// assert_eq!(deck.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckList {
    pub faction: Faction,
    pub cards: Vec<Card>,
}

impl DeckList {
    /// Create an empty deck for a faction.
    #[must_use]
    pub fn new(faction: Faction) -> Self {
        Self {
            faction,
            cards: Vec::new(),
        }
    }

    /// Add a card (builder pattern).
    #[must_use]
    pub fn with_card(mut self, card: Card) -> Self {
        self.cards.push(card);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Names that occur more than once in this deck, in first-seen order.
    ///
    /// Duplicates are legal; a name-based play picks the first copy.
    #[must_use]
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        let mut duplicates = Vec::new();

        for card in &self.cards {
            let seen = counts.entry(card.name.as_str()).or_insert(0);
            *seen += 1;
            if *seen == 2 {
                duplicates.push(card.name.as_str());
            }
        }

        duplicates
    }

    /// Deal every card into instances owned by `owner`, in list order.
    pub fn deal(&self, owner: PlayerId, ids: &mut EntityAllocator) -> Vec<CardInstance> {
        self.cards
            .iter()
            .map(|card| CardInstance::new(ids.alloc(), owner, card.clone()))
            .collect()
    }
}

/// Novigrad starter deck.
#[must_use]
pub fn novigrad_starter() -> DeckList {
    DeckList::new(Faction::Novigrad)
        .with_card(Card::melee("Poor Fucking Infantry", 1))
        .with_card(Card::melee("Geralt of Rivia", 15))
        .with_card(Card::melee("Vesemir", 6))
        .with_card(Card::ranged("Dethmold", 6))
        .with_card(Card::siege("Trebuchet", 6))
        .with_card(Card::ranged("Crinfid Reavers Dragon Hunter", 5))
}

/// Northern Realms starter deck.
#[must_use]
pub fn northern_realms_starter() -> DeckList {
    DeckList::new(Faction::NorthernRealms)
        .with_card(Card::melee("Thaler", 1))
        .with_card(Card::ranged("Sabrina Glevissig", 10))
        .with_card(Card::ranged("Philippa Eilhart", 10))
        .with_card(Card::melee("Ves", 5))
        .with_card(Card::melee("Esterad Thissen", 50))
        .with_card(Card::melee("Poor Fucking Infantry", 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity::EntityId;

    #[test]
    fn test_starter_decks() {
        let novigrad = novigrad_starter();
        let realms = northern_realms_starter();

        assert_eq!(novigrad.faction, Faction::Novigrad);
        assert_eq!(realms.faction, Faction::NorthernRealms);
        assert_eq!(novigrad.len(), 6);
        assert_eq!(realms.len(), 6);

        let total: u32 = realms.cards.iter().map(|c| c.strength).sum();
        assert_eq!(total, 77);
    }

    #[test]
    fn test_deal_allocates_unique_ids() {
        let mut ids = EntityAllocator::new();
        let first = novigrad_starter().deal(PlayerId::FIRST, &mut ids);
        let second = northern_realms_starter().deal(PlayerId::SECOND, &mut ids);

        assert_eq!(first[0].entity_id, EntityId(0));
        assert_eq!(second[0].entity_id, EntityId(6));
        assert!(first.iter().all(|c| c.owner == PlayerId::FIRST));
        assert!(second.iter().all(|c| c.owner == PlayerId::SECOND));

        // Same name across decks, independent cards.
        assert_eq!(first[0].name(), second[5].name());
        assert_ne!(first[0].entity_id, second[5].entity_id);
    }

    #[test]
    fn test_duplicate_names() {
        let deck = DeckList::new(Faction::Nilfgaard)
            .with_card(Card::melee("Archer", 10))
            .with_card(Card::melee("Archer", 10))
            .with_card(Card::melee("Archer", 10))
            .with_card(Card::siege("Scorpion", 10));

        assert_eq!(deck.duplicate_names(), vec!["Archer"]);
        assert!(novigrad_starter().duplicate_names().is_empty());
    }

    #[test]
    fn test_deck_serialization() {
        let deck = northern_realms_starter();

        let json = serde_json::to_string(&deck).unwrap();
        let deserialized: DeckList = serde_json::from_str(&json).unwrap();

        assert_eq!(deck, deserialized);
    }
}
