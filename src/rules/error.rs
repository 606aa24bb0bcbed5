use thiserror::Error;

use crate::core::action::CardRef;
use crate::core::player::PlayerId;

/// Errors raised while processing intents.
///
/// Every error leaves the match exactly as it was before the failing
/// intent; the same player is asked again on the next step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("{player} has no card {card} in hand")]
    CardNotFound { player: PlayerId, card: CardRef },

    #[error("unrecognized intent {0:?}")]
    InvalidIntent(String),

    #[error("command source for {0} has no more intents")]
    SourceExhausted(PlayerId),
}

impl EngineError {
    /// Can the caller simply ask the same player again?
    ///
    /// Rule violations are recoverable; an exhausted source is not.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, EngineError::SourceExhausted(_))
    }
}
