//! A seated player and the turn protocol.
//!
//! ## Turn protocol
//!
//! While its round status is `Active`, a player is repeatedly given turns.
//! During a turn it is asked for intents until the turn ends:
//!
//! | Intent | Turn | Round |
//! |---|---|---|
//! | `Play(name)` | ends under `PlayPolicy::EndsTurn`, stays open under `KeepsTurn` | stays `Active` |
//! | `Pass` | ends | stays `Active` |
//! | `Skip` | ends | `Done` |
//!
//! `Pass` does not end round participation: a player that keeps passing is
//! offered a new turn every cycle. Only `Skip` takes it out of the round.

use im::Vector;
use tracing::{debug, instrument, warn};

use crate::cards::{CardInstance, Faction};
use crate::core::action::{CardRef, Intent};
use crate::core::config::{PlayPolicy, PlayerConfig};
use crate::core::entity::{EntityAllocator, EntityId};
use crate::core::player::PlayerId;
use crate::core::state::{PlayerView, RoundStatus, TurnStatus};
use crate::zones::{Board, Hand};

use super::EngineError;

/// One side of a match: hand, board, discard pile, life and status flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    hand: Hand,
    board: Board,
    discard: Vector<CardInstance>,
    life: u32,
    initial_hand_size: usize,
    round: RoundStatus,
    turn: TurnStatus,
}

impl Player {
    /// Seat a player with an already dealt hand.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, life: u32, hand: Hand) -> Self {
        Self {
            id,
            name: name.into(),
            initial_hand_size: hand.len(),
            hand,
            board: Board::new(),
            discard: Vector::new(),
            life,
            round: RoundStatus::Active,
            turn: TurnStatus::Done,
        }
    }

    /// Seat a player from config, dealing its deck with ids from `ids`.
    pub fn from_config(id: PlayerId, config: &PlayerConfig, ids: &mut EntityAllocator) -> Self {
        let hand = Hand::new(id, config.deck.faction, config.deck.deal(id, ids));
        Self::new(id, config.name.clone(), config.life, hand)
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn faction(&self) -> Faction {
        self.hand.faction()
    }

    #[must_use]
    pub fn life(&self) -> u32 {
        self.life
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cards cleared from the board in finished rounds.
    #[must_use]
    pub fn discard(&self) -> &Vector<CardInstance> {
        &self.discard
    }

    /// Hand size at the start of the match.
    #[must_use]
    pub fn initial_hand_size(&self) -> usize {
        self.initial_hand_size
    }

    #[must_use]
    pub fn round_status(&self) -> RoundStatus {
        self.round
    }

    #[must_use]
    pub fn turn_status(&self) -> TurnStatus {
        self.turn
    }

    #[must_use]
    pub fn is_round_active(&self) -> bool {
        self.round == RoundStatus::Active
    }

    #[must_use]
    pub fn is_turn_active(&self) -> bool {
        self.turn == TurnStatus::Active
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    #[must_use]
    pub fn total_strength(&self) -> u64 {
        self.board.total_strength()
    }

    /// `"<name> with <faction>"`.
    #[must_use]
    pub fn describe(&self) -> String {
        format!("{} with {}", self.name, self.faction())
    }

    /// Re-enter the round. Called for both players at every round start.
    pub fn begin_round(&mut self) {
        self.round = RoundStatus::Active;
        self.turn = TurnStatus::Done;
    }

    /// Open a turn. Players that are done with the round stay idle.
    pub fn begin_turn(&mut self) {
        if self.is_round_active() {
            self.turn = TurnStatus::Active;
        }
    }

    /// Move a card from hand to board.
    ///
    /// If the card is not in hand, nothing changes.
    pub fn play_card(&mut self, card: &CardRef) -> Result<EntityId, EngineError> {
        let played = self.hand.play(card)?;
        let id = played.entity_id;
        self.board.add_card(played);
        Ok(id)
    }

    /// Apply one intent to this player.
    ///
    /// Returns the id of the card moved, for plays. On error no state
    /// changes and the turn stays open.
    #[instrument(skip(self), fields(player = %self.id))]
    pub fn apply_intent(
        &mut self,
        intent: &Intent,
        policy: PlayPolicy,
    ) -> Result<Option<EntityId>, EngineError> {
        match intent {
            Intent::Play(name) => {
                let id = self
                    .play_card(&CardRef::Name(name.clone()))
                    .inspect_err(|err| warn!(%err, "intent rejected"))?;
                if policy == PlayPolicy::EndsTurn {
                    self.turn = TurnStatus::Done;
                }
                debug!(card = %id, strength = self.total_strength(), "card played");
                Ok(Some(id))
            }
            Intent::Pass => {
                self.turn = TurnStatus::Done;
                debug!("turn passed");
                Ok(None)
            }
            Intent::Skip => {
                self.turn = TurnStatus::Done;
                self.round = RoundStatus::Done;
                debug!("round skipped");
                Ok(None)
            }
        }
    }

    /// Settle the round: lose one life unless `won`, then clear the board
    /// into the discard pile.
    pub fn end_round(&mut self, won: bool) {
        if !won {
            self.life = self.life.saturating_sub(1);
        }
        self.discard.extend(self.board.reset());
        self.round = RoundStatus::Done;
        self.turn = TurnStatus::Done;
    }

    /// Snapshot for command sources and display sinks.
    #[must_use]
    pub fn view(&self) -> PlayerView {
        PlayerView {
            id: self.id,
            name: self.name.clone(),
            faction: self.faction(),
            life: self.life,
            round: self.round,
            turn: self.turn,
            hand: self.hand.cards().clone(),
            board: self.board.clone(),
            discarded: self.discard.len(),
        }
    }
}
