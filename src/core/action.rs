//! Player intents: what a command source asks the engine to do.
//!
//! The external contract is name-based:
//! - `Play(name)` commits the named card from hand to board
//! - `Pass` ends the current turn only
//! - `Skip` ends the turn and the player's participation in the round
//!
//! Internally a name is resolved to the `EntityId` of one concrete card,
//! see `CardRef`.

use serde::{Deserialize, Serialize};

use super::entity::EntityId;
use super::player::PlayerId;
use crate::rules::EngineError;

/// Raw command that ends the current turn.
pub const PASS_COMMAND: &str = "N";

/// Raw command that skips the rest of the round.
pub const SKIP_COMMAND: &str = "S";

/// A player's declared action for one intent request.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Play the card with this name from hand.
    Play(String),
    /// End this turn; the player is offered another turn later in the round.
    Pass,
    /// End this turn and the round for this player.
    Skip,
}

impl Intent {
    /// Build a play intent.
    #[must_use]
    pub fn play(name: impl Into<String>) -> Self {
        Intent::Play(name.into())
    }

    /// Parse a raw terminal command.
    ///
    /// `N` passes, `S` skips, anything else names a card. Matching is
    /// case-sensitive; surrounding whitespace is ignored.
    ///
    /// ```
    /// use rust_gwent::core::Intent;
    ///
    /// assert_eq!(Intent::parse("N").unwrap(), Intent::Pass);
    /// assert_eq!(Intent::parse("S\n").unwrap(), Intent::Skip);
    /// assert_eq!(Intent::parse("Vesemir").unwrap(), Intent::play("Vesemir"));
    /// assert!(Intent::parse("   ").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, EngineError> {
        match raw.trim() {
            "" => Err(EngineError::InvalidIntent(raw.to_string())),
            PASS_COMMAND => Ok(Intent::Pass),
            SKIP_COMMAND => Ok(Intent::Skip),
            name => Ok(Intent::Play(name.to_string())),
        }
    }

    /// Does this intent end the player's round participation?
    #[must_use]
    pub fn ends_round(&self) -> bool {
        matches!(self, Intent::Skip)
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::Play(name) => write!(f, "play {name:?}"),
            Intent::Pass => f.write_str("pass"),
            Intent::Skip => f.write_str("skip"),
        }
    }
}

/// Reference to a card in a hand, either by identity or by name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardRef {
    /// A specific dealt card.
    Id(EntityId),
    /// The first card in hand order with this name.
    Name(String),
}

impl From<EntityId> for CardRef {
    fn from(id: EntityId) -> Self {
        CardRef::Id(id)
    }
}

impl From<&str> for CardRef {
    fn from(name: &str) -> Self {
        CardRef::Name(name.to_string())
    }
}

impl std::fmt::Display for CardRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardRef::Id(id) => write!(f, "{id}"),
            CardRef::Name(name) => write!(f, "{name:?}"),
        }
    }
}

/// An applied intent with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRecord {
    /// The player who acted.
    pub player: PlayerId,

    /// The intent as received.
    pub intent: Intent,

    /// The card actually moved, for plays.
    pub card: Option<EntityId>,

    /// Round number (starts at 1).
    pub round: u32,

    /// Sequence number within the match.
    pub sequence: u32,
}

impl IntentRecord {
    /// Create a new intent record.
    #[must_use]
    pub fn new(
        player: PlayerId,
        intent: Intent,
        card: Option<EntityId>,
        round: u32,
        sequence: u32,
    ) -> Self {
        Self {
            player,
            intent,
            card,
            round,
            sequence,
        }
    }
}
