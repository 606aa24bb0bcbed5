//! Game rules: players, the match loop and engine errors.
//!
//! `Player` owns one side's zones and applies intents to them. `Match`
//! drives both players through rounds, scores them and decides the winner.

pub mod engine;
pub mod error;
pub mod player;

pub use engine::{match_winner, round_winner, Decision, Match, MatchOutcome, RoundResult};
pub use error::EngineError;
pub use player::Player;
