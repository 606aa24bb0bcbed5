//! # rust-gwent
//!
//! A rules engine for a simplified two-player Gwent-style card game.
//!
//! ## Rules in brief
//!
//! Each player starts with a fixed hand and some life. A match is a series
//! of rounds. In every round the players take turns playing cards onto
//! three lanes (Melee, Ranged, Siege), passing, or skipping the rest of the
//! round. When both have skipped, the higher board strength wins the round
//! and the loser loses one life. The match ends when a player has no life
//! left.
//!
//! ## Design Principles
//!
//! 1. **Collaborators at the edges**: intents come from a `CommandSource`
//!    and the match only reports to a `DisplaySink`. Terminal IO lives in
//!    the `gwent` binary.
//!
//! 2. **Steppable**: `Match::step` performs one unit of work, so a match
//!    can be driven, inspected or resumed from any caller.
//!
//! 3. **Cheap snapshots**: hands, lanes and history use `im-rs`
//!    persistent vectors, so `PlayerView` clones are O(1).
//!
//! ## Modules
//!
//! - `core`: Entity IDs, players, intents, configuration, RNG, state
//! - `cards`: Card definitions, instances and starter decks
//! - `zones`: Hand and board
//! - `rules`: Player turn protocol, the match loop and errors
//! - `interface`: Command sources and display sinks

pub mod cards;
pub mod core;
pub mod interface;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    CardRef, EntityAllocator, EntityId, GameRng, Intent, IntentRecord, MatchConfig, MatchPhase,
    PlayPolicy, PlayerConfig, PlayerId, PlayerMap, PlayerView, RoundStatus, TurnStatus,
};

pub use crate::cards::{
    northern_realms_starter, novigrad_starter, Card, CardInstance, DeckList, Faction, Lane,
};

pub use crate::zones::{Board, Hand};

pub use crate::rules::{Decision, EngineError, Match, MatchOutcome, Player, RoundResult};

pub use crate::interface::{
    CommandSource, DisplaySink, NullSink, RandomSource, RecordingSink, RenderEvent,
    ScriptedSource, TextSink,
};
