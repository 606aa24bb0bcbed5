//! Card instances - a card dealt into a specific match.
//!
//! `CardInstance` pairs the static `Card` with the `EntityId` it was
//! dealt under and the player who owns it. Instances move from hand to
//! board to discard; they are never copied into two zones at once.

use serde::{Deserialize, Serialize};

use super::definition::{Card, Lane};
use crate::core::entity::EntityId;
use crate::core::player::PlayerId;

/// A card instance in a match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique entity ID for this instance.
    pub entity_id: EntityId,

    /// Player whose deck this card came from.
    pub owner: PlayerId,

    /// Static card data.
    pub card: Card,
}

impl CardInstance {
    /// Create a card instance.
    #[must_use]
    pub fn new(entity_id: EntityId, owner: PlayerId, card: Card) -> Self {
        Self {
            entity_id,
            owner,
            card,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.card.name
    }

    #[must_use]
    pub fn strength(&self) -> u32 {
        self.card.strength
    }

    #[must_use]
    pub fn lane(&self) -> Lane {
        self.card.lane
    }
}

impl std::fmt::Display for CardInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.card.fmt(f)
    }
}
