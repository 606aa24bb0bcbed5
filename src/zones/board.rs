//! Per-player board: three lanes of committed cards.
//!
//! The board is pure aggregation state. Strength queries never mutate it,
//! and `reset` is the only way cards leave it.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{CardInstance, Lane};

/// Cards a player has committed this round, one row per lane.
///
/// ## Usage
///
/// ```
/// use rust_gwent::cards::{Card, CardInstance, Lane};
/// use rust_gwent::core::{EntityId, PlayerId};
/// use rust_gwent::zones::Board;
///
/// let mut board = Board::new();
/// board.add_card(CardInstance::new(EntityId(0), PlayerId::FIRST, Card::melee("Vesemir", 6)));
/// board.add_card(CardInstance::new(EntityId(1), PlayerId::FIRST, Card::siege("Trebuchet", 6)));
///
/// assert_eq!(board.lane_strength(Lane::Melee), 6);
/// assert_eq!(board.lane_strength(Lane::Ranged), 0);
/// assert_eq!(board.total_strength(), 12);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    lanes: [Vector<CardInstance>; 3],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card to the row matching its lane. No capacity limit.
    pub fn add_card(&mut self, card: CardInstance) {
        self.lanes[card.lane().index()].push_back(card);
    }

    /// Cards in a lane, in play order.
    #[must_use]
    pub fn lane(&self, lane: Lane) -> &Vector<CardInstance> {
        &self.lanes[lane.index()]
    }

    /// Sum of strengths in one lane.
    #[must_use]
    pub fn lane_strength(&self, lane: Lane) -> u64 {
        self.lane(lane).iter().map(|c| u64::from(c.strength())).sum()
    }

    /// Sum of all three lane strengths.
    #[must_use]
    pub fn total_strength(&self) -> u64 {
        Lane::ALL.iter().map(|&lane| self.lane_strength(lane)).sum()
    }

    /// Number of cards across all lanes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lanes.iter().map(Vector::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lanes.iter().all(Vector::is_empty)
    }

    /// All cards, lane by lane.
    pub fn iter(&self) -> impl Iterator<Item = &CardInstance> {
        self.lanes.iter().flat_map(|lane| lane.iter())
    }

    /// Empty all three lanes, returning the removed cards lane by lane.
    ///
    /// Resetting an empty board is a no-op.
    pub fn reset(&mut self) -> Vec<CardInstance> {
        let mut cleared = Vec::with_capacity(self.len());
        for lane in &mut self.lanes {
            cleared.extend(std::mem::take(lane));
        }
        cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::core::entity::EntityId;
    use crate::core::player::PlayerId;

    fn instance(id: u32, card: Card) -> CardInstance {
        CardInstance::new(EntityId(id), PlayerId::FIRST, card)
    }

    #[test]
    fn test_add_card_routes_by_lane() {
        let mut board = Board::new();
        board.add_card(instance(0, Card::melee("Ves", 5)));
        board.add_card(instance(1, Card::ranged("Dethmold", 6)));
        board.add_card(instance(2, Card::melee("Vesemir", 6)));

        assert_eq!(board.lane(Lane::Melee).len(), 2);
        assert_eq!(board.lane(Lane::Ranged).len(), 1);
        assert!(board.lane(Lane::Siege).is_empty());
        assert_eq!(board.lane(Lane::Melee)[1].name(), "Vesemir");
    }

    #[test]
    fn test_strengths() {
        let mut board = Board::new();
        board.add_card(instance(0, Card::melee("Esterad Thissen", 50)));
        board.add_card(instance(1, Card::ranged("Sabrina Glevissig", 10)));
        board.add_card(instance(2, Card::ranged("Philippa Eilhart", 10)));

        assert_eq!(board.lane_strength(Lane::Melee), 50);
        assert_eq!(board.lane_strength(Lane::Ranged), 20);
        assert_eq!(board.lane_strength(Lane::Siege), 0);
        assert_eq!(board.total_strength(), 70);
        assert_eq!(board.len(), 3);
    }

    #[test]
    fn test_queries_do_not_mutate() {
        let mut board = Board::new();
        board.add_card(instance(0, Card::siege("Trebuchet", 6)));
        let before = board.clone();

        let _ = board.total_strength();
        let _ = board.lane_strength(Lane::Siege);

        assert_eq!(board, before);
    }

    #[test]
    fn test_reset_returns_cards_and_is_idempotent() {
        let mut board = Board::new();
        board.add_card(instance(0, Card::siege("Trebuchet", 6)));
        board.add_card(instance(1, Card::melee("Ves", 5)));

        let cleared = board.reset();
        assert_eq!(cleared.len(), 2);
        // Lane order: melee first.
        assert_eq!(cleared[0].name(), "Ves");
        assert!(board.is_empty());
        assert_eq!(board.total_strength(), 0);

        let once = board.clone();
        assert!(board.reset().is_empty());
        assert_eq!(board, once);
        assert_eq!(board, Board::new());
    }
}
