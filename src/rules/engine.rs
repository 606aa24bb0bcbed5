//! The match: round loop, scoring and win detection.
//!
//! ## State machine
//!
//! ```text
//!   start ──► RoundInProgress ──(both players Done)──► RoundScoring
//!                  ▲                                       │
//!                  └────────(both players alive)───────────┤
//!                                                          ▼
//!                                                      MatchOver
//! ```
//!
//! Within `RoundInProgress` the match walks turn cycles. Each cycle gives
//! a turn to every round-active player in seat order, Player 1 first, and
//! keeps asking the acting player for intents until its turn ends.
//!
//! `Match::step` performs one unit of work: one intent, or one scoring.
//! `Match::run` steps until the match is over.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::core::action::IntentRecord;
use crate::core::config::{MatchConfig, PlayPolicy};
use crate::core::entity::EntityAllocator;
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::state::{MatchPhase, PlayerView};
use crate::interface::{CommandSource, DisplaySink, RenderEvent};

use super::player::Player;
use super::EngineError;

/// Outcome of one scored round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Round number (starts at 1).
    pub round: u32,
    pub winner: PlayerId,
    pub winner_name: String,
    /// Board totals at scoring time.
    pub strengths: PlayerMap<u64>,
    /// Life after the loser's decrement.
    pub lives: PlayerMap<u32>,
}

/// How the match winner was determined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// Exactly one player was still alive.
    LastStanding,
    /// Neither or both players were alive; Player 1 takes priority.
    FirstSeatPriority,
}

/// Final result of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub winner: PlayerId,
    pub winner_name: String,
    pub decided_by: Decision,
    /// Rounds scored.
    pub rounds: u32,
    pub lives: PlayerMap<u32>,
}

/// Round winner: Player 2 needs a strictly greater total, so Player 1 is
/// credited every tie.
#[must_use]
pub fn round_winner(strengths: &PlayerMap<u64>) -> PlayerId {
    if strengths[PlayerId::SECOND] > strengths[PlayerId::FIRST] {
        PlayerId::SECOND
    } else {
        PlayerId::FIRST
    }
}

/// Match winner, with Player 1 priority on ambiguous ends.
///
/// Player 1 if alive, else Player 2 if alive, else Player 1.
#[must_use]
pub fn match_winner(alive: &PlayerMap<bool>) -> (PlayerId, Decision) {
    match (alive[PlayerId::FIRST], alive[PlayerId::SECOND]) {
        (true, false) => (PlayerId::FIRST, Decision::LastStanding),
        (false, true) => (PlayerId::SECOND, Decision::LastStanding),
        _ => (PlayerId::FIRST, Decision::FirstSeatPriority),
    }
}

/// A two-player match.
///
/// ## Example
///
/// ```
/// use rust_gwent::core::{Intent, MatchConfig, PlayerId};
/// use rust_gwent::interface::{NullSink, ScriptedSource};
/// use rust_gwent::rules::Match;
///
/// let mut game = Match::new(&MatchConfig::starter());
/// let mut source = ScriptedSource::new()
///     .with_intents(PlayerId::FIRST, [Intent::play("Geralt of Rivia"), Intent::Skip])
///     .with_intents(PlayerId::SECOND, [Intent::play("Ves"), Intent::Skip])
///     .with_intents(PlayerId::FIRST, [Intent::Skip])
///     .with_intents(PlayerId::SECOND, [Intent::Skip]);
///
/// let outcome = game.run(&mut source, &mut NullSink).unwrap();
/// assert_eq!(outcome.winner, PlayerId::FIRST);
/// assert_eq!(outcome.rounds, 2);
/// ```
#[derive(Clone, Debug)]
pub struct Match {
    players: PlayerMap<Player>,
    policy: PlayPolicy,
    phase: MatchPhase,
    started: bool,
    round: u32,
    /// Player whose turn is open.
    acting: Option<PlayerId>,
    history: Vector<IntentRecord>,
    rounds: Vec<RoundResult>,
    outcome: Option<MatchOutcome>,
}

impl Match {
    /// Deal both decks and seat the players.
    #[must_use]
    pub fn new(config: &MatchConfig) -> Self {
        let mut ids = EntityAllocator::new();
        let players = PlayerMap::new(|id| Player::from_config(id, config.player(id), &mut ids));
        Self::from_players(players, config.play_policy)
    }

    /// Build a match from already seated players.
    #[must_use]
    pub fn from_players(players: PlayerMap<Player>, policy: PlayPolicy) -> Self {
        Self {
            players,
            policy,
            phase: MatchPhase::RoundInProgress,
            started: false,
            round: 0,
            acting: None,
            history: Vector::new(),
            rounds: Vec::new(),
            outcome: None,
        }
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    #[must_use]
    pub fn policy(&self) -> PlayPolicy {
        self.policy
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Current round number; 0 before the match starts.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// The player who will be asked for the next intent.
    #[must_use]
    pub fn acting_player(&self) -> Option<PlayerId> {
        self.acting
    }

    /// Every applied intent, oldest first. Cloning is O(1).
    #[must_use]
    pub fn history(&self) -> &Vector<IntentRecord> {
        &self.history
    }

    #[must_use]
    pub fn round_results(&self) -> &[RoundResult] {
        &self.rounds
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&MatchOutcome> {
        self.outcome.as_ref()
    }

    /// Snapshots of both players.
    #[must_use]
    pub fn views(&self) -> PlayerMap<PlayerView> {
        self.players.map(|_, p| p.view())
    }

    /// Announce the match and open round 1.
    ///
    /// A player that starts with no life ends the match on the spot.
    /// Calling `start` twice does nothing.
    #[instrument(skip_all)]
    pub fn start(&mut self, sink: &mut impl DisplaySink) {
        if self.started {
            return;
        }
        self.started = true;

        info!(
            first = %self.players[PlayerId::FIRST].describe(),
            second = %self.players[PlayerId::SECOND].describe(),
            "match starting"
        );
        sink.render(&RenderEvent::MatchStarted {
            players: self.views(),
        });

        if self.both_alive() {
            self.begin_round();
        } else {
            self.finish(sink);
        }
    }

    /// Perform one unit of work and return the resulting phase.
    ///
    /// On error nothing changes; the same player is asked again next step.
    pub fn step(
        &mut self,
        source: &mut impl CommandSource,
        sink: &mut impl DisplaySink,
    ) -> Result<MatchPhase, EngineError> {
        if !self.started {
            self.start(sink);
            return Ok(self.phase);
        }

        match self.phase {
            MatchPhase::RoundInProgress => self.take_intent(source, sink)?,
            MatchPhase::RoundScoring => self.score_round(sink),
            MatchPhase::MatchOver => {}
        }
        Ok(self.phase)
    }

    /// Play until a winner is determined.
    ///
    /// Stops at the first error; the match can be resumed with `step` or
    /// another `run`.
    pub fn run(
        &mut self,
        source: &mut impl CommandSource,
        sink: &mut impl DisplaySink,
    ) -> Result<MatchOutcome, EngineError> {
        loop {
            if let Some(outcome) = &self.outcome {
                return Ok(outcome.clone());
            }
            self.step(source, sink)?;
        }
    }

    fn both_alive(&self) -> bool {
        self.players.iter().all(|(_, p)| p.is_alive())
    }

    fn begin_round(&mut self) {
        self.round += 1;
        for (_, player) in self.players.iter_mut() {
            player.begin_round();
        }
        self.phase = MatchPhase::RoundInProgress;
        self.acting = None;
        debug!(round = self.round, "round starting");
        self.pass_turn();
    }

    /// Hand the turn to the next round-active player.
    ///
    /// Player 2 follows Player 1 within a cycle; otherwise a new cycle
    /// starts from the first round-active seat. With nobody left the round
    /// goes to scoring.
    fn pass_turn(&mut self) {
        let second_follows = self.acting == Some(PlayerId::FIRST)
            && self.players[PlayerId::SECOND].is_round_active();

        let next = if second_follows {
            Some(PlayerId::SECOND)
        } else {
            PlayerId::both().find(|&id| self.players[id].is_round_active())
        };

        match next {
            Some(id) => {
                self.players[id].begin_turn();
                self.acting = Some(id);
            }
            None => {
                self.acting = None;
                self.phase = MatchPhase::RoundScoring;
            }
        }
    }

    fn take_intent(
        &mut self,
        source: &mut impl CommandSource,
        sink: &mut impl DisplaySink,
    ) -> Result<(), EngineError> {
        let Some(actor) = self.acting else {
            self.pass_turn();
            return Ok(());
        };

        let view = self.players[actor].view();
        sink.render(&RenderEvent::BoardState {
            round: self.round,
            view: view.clone(),
        });
        sink.render(&RenderEvent::HandListing { view: view.clone() });

        let intent = source.next_intent(&view)?;
        let card = self.players[actor].apply_intent(&intent, self.policy)?;

        let sequence = self.history.len() as u32;
        self.history.push_back(IntentRecord::new(
            actor,
            intent,
            card,
            self.round,
            sequence,
        ));

        if !self.players[actor].is_turn_active() {
            self.pass_turn();
        }
        Ok(())
    }

    #[instrument(skip_all, fields(round = self.round))]
    fn score_round(&mut self, sink: &mut impl DisplaySink) {
        let strengths = self.players.map(|_, p| p.total_strength());
        let winner = round_winner(&strengths);

        for (id, player) in self.players.iter_mut() {
            player.end_round(id == winner);
        }

        let result = RoundResult {
            round: self.round,
            winner,
            winner_name: self.players[winner].name().to_string(),
            strengths,
            lives: self.players.map(|_, p| p.life()),
        };
        info!(
            winner = %result.winner_name,
            first = result.strengths[PlayerId::FIRST],
            second = result.strengths[PlayerId::SECOND],
            "round ended"
        );
        sink.render(&RenderEvent::RoundEnded(result.clone()));
        self.rounds.push(result);

        if self.both_alive() {
            self.begin_round();
        } else {
            self.finish(sink);
        }
    }

    fn finish(&mut self, sink: &mut impl DisplaySink) {
        let alive = self.players.map(|_, p| p.is_alive());
        let (winner, decided_by) = match_winner(&alive);

        let outcome = MatchOutcome {
            winner,
            winner_name: self.players[winner].name().to_string(),
            decided_by,
            rounds: self.rounds.len() as u32,
            lives: self.players.map(|_, p| p.life()),
        };
        info!(winner = %outcome.winner_name, ?decided_by, "match over");

        self.phase = MatchPhase::MatchOver;
        self.acting = None;
        sink.render(&RenderEvent::MatchWon(outcome.clone()));
        self.outcome = Some(outcome);
    }
}
