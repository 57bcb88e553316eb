//! Game record error types.

use thiserror::Error;

use super::models::{GameId, GameState};
use crate::errors::ErrorKind;
use crate::player::PlayerId;
use crate::store::StoreError;

/// Game record errors.
#[derive(Debug, Error)]
pub enum GameError {
    /// Game not found
    #[error("game not found: {0}")]
    NotFound(GameId),

    /// Referenced player not found
    #[error("player not found: {0}")]
    PlayerNotFound(PlayerId),

    /// Creation request names a player that does not exist
    #[error("no such player: {0}")]
    UnknownPlayer(PlayerId),

    /// Both sides of the match are the same player
    #[error("player {0} cannot play against themselves")]
    SelfMatch(PlayerId),

    /// The game is already settled and rejects all mutation
    #[error("game is already {0}")]
    AlreadySettled(GameState),

    /// The requested transition would move the state backwards
    #[error("cannot move game from {from} back to {to}")]
    BackwardTransition { from: GameState, to: GameState },

    /// A finished game needs strictly unequal scores
    #[error("finished game cannot end in a tie ({0}-{0})")]
    TiedScore(u32),

    /// Storage failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl GameError {
    /// Classification for the transport boundary.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::NotFound(_) | GameError::PlayerNotFound(_) => ErrorKind::NotFound,
            GameError::UnknownPlayer(_) | GameError::SelfMatch(_) | GameError::TiedScore(_) => {
                ErrorKind::InvalidArgument
            }
            GameError::AlreadySettled(_) | GameError::BackwardTransition { .. } => {
                ErrorKind::Conflict
            }
            GameError::Store(_) => ErrorKind::Unavailable,
        }
    }
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
