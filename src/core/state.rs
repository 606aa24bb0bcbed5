//! Match progression state and read-only player views.
//!
//! ## Status flags
//!
//! Each player carries a two-level state machine:
//! - `RoundStatus`: may the player still act this round?
//! - `TurnStatus`: is the player's current turn still open?
//!
//! Both are reset by the match: round status at every round start, turn
//! status whenever the player's turn begins.
//!
//! ## PlayerView
//!
//! A snapshot of one player handed to command sources and display sinks.
//! Hand and board are `im` vectors, so building a view is cheap and the
//! view can never be used to mutate the match.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::{CardInstance, Faction};
use crate::zones::Board;

/// Round-level participation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    /// The player may still act this round.
    #[default]
    Active,
    /// The player skipped; no more actions until the next round.
    Done,
}

/// Turn-level activity, nested inside `RoundStatus::Active`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnStatus {
    /// The player is being asked for intents.
    Active,
    /// The turn has ended.
    #[default]
    Done,
}

/// Match-level phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Players are taking turns.
    RoundInProgress,
    /// Both players are done; boards are about to be compared.
    RoundScoring,
    /// A player reached zero life.
    MatchOver,
}

impl MatchPhase {
    #[must_use]
    pub fn is_over(self) -> bool {
        self == MatchPhase::MatchOver
    }
}

/// Read-only snapshot of one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub faction: Faction,
    pub life: u32,
    pub round: RoundStatus,
    pub turn: TurnStatus,
    /// Unplayed cards, in hand order.
    pub hand: Vector<CardInstance>,
    /// Cards committed this round.
    pub board: Board,
    /// Cards cleared from the board in earlier rounds.
    pub discarded: usize,
}

impl PlayerView {
    /// Total board strength.
    #[must_use]
    pub fn total_strength(&self) -> u64 {
        self.board.total_strength()
    }

    /// Is a card with this name in hand?
    #[must_use]
    pub fn holds(&self, name: &str) -> bool {
        self.hand.iter().any(|c| c.name() == name)
    }

    /// Names of the cards in hand, in order.
    pub fn hand_names(&self) -> impl Iterator<Item = &str> {
        self.hand.iter().map(CardInstance::name)
    }
}
