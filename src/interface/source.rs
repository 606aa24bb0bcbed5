//! Command sources: where intents come from.
//!
//! The engine asks a `CommandSource` for one intent at a time and blocks
//! until it answers. Anything honoring that contract can drive a match:
//! a terminal, a script, a test harness, or a plain closure.
//!
//! ```
//! use rust_gwent::core::{Intent, PlayerView};
//! use rust_gwent::interface::CommandSource;
//! use rust_gwent::rules::EngineError;
//!
//! // Always skip.
//! let mut source = |_: &PlayerView| -> Result<Intent, EngineError> { Ok(Intent::Skip) };
//! # fn takes(_: &mut impl CommandSource) {}
//! # takes(&mut source);
//! ```

use std::collections::VecDeque;

use crate::core::action::Intent;
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::rng::GameRng;
use crate::core::state::PlayerView;
use crate::rules::EngineError;

/// Supplies intents for the acting player.
pub trait CommandSource {
    /// Produce the next intent for the player described by `view`.
    fn next_intent(&mut self, view: &PlayerView) -> Result<Intent, EngineError>;
}

impl<F> CommandSource for F
where
    F: FnMut(&PlayerView) -> Result<Intent, EngineError>,
{
    fn next_intent(&mut self, view: &PlayerView) -> Result<Intent, EngineError> {
        self(view)
    }
}

/// Replays fixed per-player intent queues.
///
/// Fails with `SourceExhausted` once a player's queue runs dry.
///
/// ## Example
///
/// ```
/// use rust_gwent::core::{Intent, PlayerId};
/// use rust_gwent::interface::ScriptedSource;
///
/// let source = ScriptedSource::new()
///     .with_intents(PlayerId::FIRST, [Intent::play("Geralt of Rivia"), Intent::Skip])
///     .with_commands(PlayerId::SECOND, ["Vesemir", "S"])
///     .unwrap();
///
/// assert_eq!(source.remaining(PlayerId::FIRST), 2);
/// assert_eq!(source.remaining(PlayerId::SECOND), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    queues: PlayerMap<VecDeque<Intent>>,
}

impl ScriptedSource {
    /// Create a source with empty queues.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append intents to a player's queue (builder pattern).
    #[must_use]
    pub fn with_intents(
        mut self,
        player: PlayerId,
        intents: impl IntoIterator<Item = Intent>,
    ) -> Self {
        self.queues[player].extend(intents);
        self
    }

    /// Append raw terminal commands to a player's queue.
    pub fn with_commands<'a>(
        mut self,
        player: PlayerId,
        commands: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, EngineError> {
        for raw in commands {
            self.queues[player].push_back(Intent::parse(raw)?);
        }
        Ok(self)
    }

    /// Append one intent.
    pub fn push(&mut self, player: PlayerId, intent: Intent) {
        self.queues[player].push_back(intent);
    }

    /// Intents left for a player.
    #[must_use]
    pub fn remaining(&self, player: PlayerId) -> usize {
        self.queues[player].len()
    }
}

impl CommandSource for ScriptedSource {
    fn next_intent(&mut self, view: &PlayerView) -> Result<Intent, EngineError> {
        self.queues[view.id]
            .pop_front()
            .ok_or(EngineError::SourceExhausted(view.id))
    }
}

/// Seeded random intents, for simulation and determinism checks.
///
/// Plays a random card from hand, passes or skips according to relative
/// weights. Skipping always keeps a positive weight so every round ends.
#[derive(Clone, Debug)]
pub struct RandomSource {
    rng: GameRng,
    weights: [f32; 3],
}

impl RandomSource {
    /// Default weights: play 6, pass 2, skip 1.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
            weights: [6.0, 2.0, 1.0],
        }
    }

    /// The seed the source replays from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Set relative weights. A non-positive skip weight is raised to a
    /// small positive value.
    #[must_use]
    pub fn with_weights(mut self, play: f32, pass: f32, skip: f32) -> Self {
        self.weights = [play.max(0.0), pass.max(0.0), skip.max(f32::EPSILON)];
        self
    }
}

impl CommandSource for RandomSource {
    fn next_intent(&mut self, view: &PlayerView) -> Result<Intent, EngineError> {
        let mut weights = self.weights;
        if view.hand.is_empty() {
            weights[0] = 0.0;
        }

        let intent = match self.rng.choose_weighted(&weights) {
            Some(0) => {
                let index = self.rng.gen_range_usize(0..view.hand.len());
                Intent::play(view.hand[index].name())
            }
            Some(1) => Intent::Pass,
            _ => Intent::Skip,
        };
        Ok(intent)
    }
}
