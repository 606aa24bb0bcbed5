//! Match configuration.
//!
//! A match is configured at startup by providing:
//! - `PlayerConfig`: name, starting life and deck for each seat
//! - `PlayPolicy`: whether playing a card ends the turn
//! - `MatchConfig`: combines both seats and the policy
//!
//! Configs can be built in code or loaded from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use super::player::PlayerId;
use crate::cards::{northern_realms_starter, novigrad_starter, DeckList};

/// Starting life when none is configured.
pub const DEFAULT_LIFE: u32 = 2;

/// Errors raised while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// What a successful play does to the acting player's turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayPolicy {
    /// A play ends the turn; the player acts again in the next cycle.
    #[default]
    EndsTurn,
    /// A play keeps the turn open; only pass or skip end it.
    KeepsTurn,
}

/// Configuration for one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Player name, shown in announcements.
    pub name: String,

    /// Starting life.
    #[serde(default = "default_life")]
    pub life: u32,

    /// Deck dealt into the player's hand.
    pub deck: DeckList,
}

fn default_life() -> u32 {
    DEFAULT_LIFE
}

impl PlayerConfig {
    /// Create a seat config with the default starting life.
    pub fn new(name: impl Into<String>, deck: DeckList) -> Self {
        Self {
            name: name.into(),
            life: DEFAULT_LIFE,
            deck,
        }
    }

    /// Set the starting life.
    #[must_use]
    pub fn with_life(mut self, life: u32) -> Self {
        self.life = life;
        self
    }
}

/// Complete match configuration.
///
/// ## Example
///
/// ```
/// use rust_gwent::cards::{novigrad_starter, northern_realms_starter};
/// use rust_gwent::core::{MatchConfig, PlayPolicy, PlayerConfig};
///
/// let config = MatchConfig::new(
///     PlayerConfig::new("Geralt of Rivia", novigrad_starter()),
///     PlayerConfig::new("Djikstra", northern_realms_starter()).with_life(3),
/// )
/// .with_play_policy(PlayPolicy::KeepsTurn);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Seats in turn order: Player 1, then Player 2.
    pub players: [PlayerConfig; 2],

    #[serde(default)]
    pub play_policy: PlayPolicy,
}

impl MatchConfig {
    /// Create a config for two seats with the default play policy.
    #[must_use]
    pub fn new(first: PlayerConfig, second: PlayerConfig) -> Self {
        Self {
            players: [first, second],
            play_policy: PlayPolicy::default(),
        }
    }

    /// The starter match: Geralt of Rivia (Novigrad) against Djikstra
    /// (Northern Realms), two lives each.
    #[must_use]
    pub fn starter() -> Self {
        Self::new(
            PlayerConfig::new("Geralt of Rivia", novigrad_starter()),
            PlayerConfig::new("Djikstra", northern_realms_starter()),
        )
    }

    /// Set the play policy.
    #[must_use]
    pub fn with_play_policy(mut self, policy: PlayPolicy) -> Self {
        self.play_policy = policy;
        self
    }

    /// Get a seat's config.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerConfig {
        &self.players[player.index()]
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check the config is playable.
    ///
    /// Empty player names are rejected. Duplicate card names inside a deck
    /// are allowed but logged, since name-based plays pick the first copy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (seat, player) in PlayerId::both().zip(&self.players) {
            if player.name.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{seat} has an empty name")));
            }
            for name in player.deck.duplicate_names() {
                warn!(%seat, card = name, "deck holds several cards with the same name");
            }
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::starter()
    }
}
