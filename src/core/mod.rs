//! Core engine types: entities, players, intents, configuration, state.
//!
//! These are the building blocks shared by zones, rules and the
//! command/display interface.

pub mod action;
pub mod config;
pub mod entity;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{CardRef, Intent, IntentRecord, PASS_COMMAND, SKIP_COMMAND};
pub use config::{ConfigError, MatchConfig, PlayPolicy, PlayerConfig, DEFAULT_LIFE};
pub use entity::{EntityAllocator, EntityId};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use state::{MatchPhase, PlayerView, RoundStatus, TurnStatus};
