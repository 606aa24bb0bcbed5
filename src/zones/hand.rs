//! A player's hand: the unplayed cards dealt from their deck.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardInstance, Faction};
use crate::core::action::CardRef;
use crate::core::entity::EntityId;
use crate::core::player::PlayerId;
use crate::rules::EngineError;

/// Ordered collection of a player's available cards.
///
/// Cards leave the hand exactly once, through `play`. Nothing is ever
/// added back.
///
/// ## Usage
///
/// ```
/// use rust_gwent::cards::{novigrad_starter, Faction};
/// use rust_gwent::core::{CardRef, EntityAllocator, PlayerId};
/// use rust_gwent::zones::Hand;
///
/// let mut ids = EntityAllocator::new();
/// let cards = novigrad_starter().deal(PlayerId::FIRST, &mut ids);
/// let mut hand = Hand::new(PlayerId::FIRST, Faction::Novigrad, cards);
///
/// let played = hand.play(&CardRef::from("Vesemir")).unwrap();
/// assert_eq!(played.strength(), 6);
/// assert_eq!(hand.len(), 5);
/// assert!(hand.play(&CardRef::from("Vesemir")).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    owner: PlayerId,
    faction: Faction,
    cards: Vector<CardInstance>,
}

impl Hand {
    /// Create a hand from dealt cards, keeping their order.
    pub fn new(
        owner: PlayerId,
        faction: Faction,
        cards: impl IntoIterator<Item = CardInstance>,
    ) -> Self {
        Self {
            owner,
            faction,
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    #[must_use]
    pub fn faction(&self) -> Faction {
        self.faction
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in hand order. Cloning the returned vector is O(1).
    #[must_use]
    pub fn cards(&self) -> &Vector<CardInstance> {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardInstance> {
        self.cards.iter()
    }

    /// Check whether a specific card is still in hand.
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.cards.iter().any(|c| c.entity_id == id)
    }

    /// All cards carrying `name`, in hand order.
    #[must_use]
    pub fn ids_named(&self, name: &str) -> SmallVec<[EntityId; 2]> {
        self.cards
            .iter()
            .filter(|c| c.name() == name)
            .map(|c| c.entity_id)
            .collect()
    }

    /// Resolve a reference to the id of the card it would play.
    ///
    /// Names resolve to the first matching card in hand order.
    #[must_use]
    pub fn resolve(&self, card: &CardRef) -> Option<EntityId> {
        self.position(card).map(|i| self.cards[i].entity_id)
    }

    fn position(&self, card: &CardRef) -> Option<usize> {
        match card {
            CardRef::Id(id) => self.cards.iter().position(|c| c.entity_id == *id),
            CardRef::Name(name) => self.cards.iter().position(|c| c.name() == name),
        }
    }

    /// Remove and return the referenced card.
    ///
    /// Fails with `CardNotFound` and leaves the hand untouched if no card
    /// matches.
    pub fn play(&mut self, card: &CardRef) -> Result<CardInstance, EngineError> {
        let index = self.position(card).ok_or_else(|| EngineError::CardNotFound {
            player: self.owner,
            card: card.clone(),
        })?;
        Ok(self.cards.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn hand_of(cards: &[Card]) -> Hand {
        Hand::new(
            PlayerId::FIRST,
            Faction::Novigrad,
            cards
                .iter()
                .enumerate()
                .map(|(i, c)| CardInstance::new(EntityId(i as u32), PlayerId::FIRST, c.clone())),
        )
    }

    #[test]
    fn test_play_by_name_removes_card() {
        let mut hand = hand_of(&[Card::melee("Ves", 5), Card::ranged("Dethmold", 6)]);

        let played = hand.play(&CardRef::from("Dethmold")).unwrap();

        assert_eq!(played.entity_id, EntityId(1));
        assert_eq!(hand.len(), 1);
        assert!(!hand.contains(EntityId(1)));
        assert!(hand.contains(EntityId(0)));
    }

    #[test]
    fn test_play_by_id() {
        let mut hand = hand_of(&[Card::melee("Ves", 5), Card::ranged("Dethmold", 6)]);

        let played = hand.play(&CardRef::Id(EntityId(0))).unwrap();
        assert_eq!(played.name(), "Ves");
    }

    #[test]
    fn test_play_missing_leaves_hand_untouched() {
        let mut hand = hand_of(&[Card::melee("Ves", 5)]);
        let before = hand.clone();

        let err = hand.play(&CardRef::from("Nonexistent")).unwrap_err();

        assert!(matches!(
            err,
            EngineError::CardNotFound { player: PlayerId::FIRST, .. }
        ));
        assert_eq!(hand, before);
    }

    #[test]
    fn test_duplicate_names_resolve_in_order() {
        let mut hand = hand_of(&[
            Card::melee("Infantry", 1),
            Card::siege("Trebuchet", 6),
            Card::melee("Infantry", 1),
        ]);

        assert_eq!(
            hand.ids_named("Infantry").as_slice(),
            &[EntityId(0), EntityId(2)]
        );
        assert_eq!(hand.resolve(&CardRef::from("Infantry")), Some(EntityId(0)));

        hand.play(&CardRef::from("Infantry")).unwrap();
        assert_eq!(hand.resolve(&CardRef::from("Infantry")), Some(EntityId(2)));

        hand.play(&CardRef::from("Infantry")).unwrap();
        assert_eq!(hand.resolve(&CardRef::from("Infantry")), None);
    }

    #[test]
    fn test_empty_hand() {
        let mut hand = hand_of(&[]);

        assert!(hand.is_empty());
        assert!(hand.play(&CardRef::from("Ves")).is_err());
    }
}
