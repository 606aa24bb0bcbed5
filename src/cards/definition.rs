//! Card definitions - static card data.
//!
//! A `Card` is an immutable value: a name, a strength and the lane it
//! fights in. Identity within a match is added later by `CardInstance`.

use serde::{Deserialize, Serialize};

/// Combat lane, and the board row a card occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Lane {
    Melee,
    Ranged,
    Siege,
}

impl Lane {
    /// All lanes in board order.
    pub const ALL: [Lane; 3] = [Lane::Melee, Lane::Ranged, Lane::Siege];

    /// Row index on a board.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Lane::Melee => 0,
            Lane::Ranged => 1,
            Lane::Siege => 2,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Lane::Melee => "Melee",
            Lane::Ranged => "Ranged",
            Lane::Siege => "Siege",
        }
    }
}

impl std::fmt::Display for Lane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The faction a deck belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Nilfgaard,
    NorthernRealms,
    Novigrad,
}

impl Faction {
    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Faction::Nilfgaard => "Nilfgaard",
            Faction::NorthernRealms => "Northern Realms",
            Faction::Novigrad => "Novigrad",
        }
    }
}

impl std::fmt::Display for Faction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use rust_gwent::cards::{Card, Lane};
///
/// let geralt = Card::new("Geralt of Rivia", 15, Lane::Melee);
///
/// assert_eq!(geralt.strength, 15);
/// assert_eq!(geralt.lane, Lane::Melee);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Card name; what a player types to play it.
    pub name: String,

    /// Strength contributed to its lane while on the board.
    pub strength: u32,

    /// Lane the card is placed in.
    pub lane: Lane,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub fn new(name: impl Into<String>, strength: u32, lane: Lane) -> Self {
        Self {
            name: name.into(),
            strength,
            lane,
        }
    }

    /// Shorthand for a melee card.
    #[must_use]
    pub fn melee(name: impl Into<String>, strength: u32) -> Self {
        Self::new(name, strength, Lane::Melee)
    }

    /// Shorthand for a ranged card.
    #[must_use]
    pub fn ranged(name: impl Into<String>, strength: u32) -> Self {
        Self::new(name, strength, Lane::Ranged)
    }

    /// Shorthand for a siege card.
    #[must_use]
    pub fn siege(name: impl Into<String>, strength: u32) -> Self {
        Self::new(name, strength, Lane::Siege)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Name: {} Strength: {} Kind: {}",
            self.name, self.strength, self.lane
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_index_matches_order() {
        for (i, lane) in Lane::ALL.iter().enumerate() {
            assert_eq!(lane.index(), i);
        }
    }

    #[test]
    fn test_faction_names() {
        assert_eq!(Faction::NorthernRealms.to_string(), "Northern Realms");
        assert_eq!(Faction::Novigrad.to_string(), "Novigrad");
        assert_eq!(Faction::Nilfgaard.to_string(), "Nilfgaard");
    }

    #[test]
    fn test_card_shorthands() {
        assert_eq!(Card::melee("Ves", 5).lane, Lane::Melee);
        assert_eq!(Card::ranged("Dethmold", 6).lane, Lane::Ranged);
        assert_eq!(Card::siege("Trebuchet", 6).lane, Lane::Siege);
    }

    #[test]
    fn test_card_display() {
        let card = Card::siege("Trebuchet", 6);
        assert_eq!(card.to_string(), "Name: Trebuchet Strength: 6 Kind: Siege");
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::ranged("Philippa Eilhart", 10);

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
