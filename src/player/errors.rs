//! Player registry error types.

use thiserror::Error;

use super::models::PlayerId;
use crate::errors::ErrorKind;
use crate::store::StoreError;
use crate::tournament::TournamentId;

/// Player registry errors.
#[derive(Debug, Error)]
pub enum PlayerError {
    /// Player not found
    #[error("player not found: {0}")]
    NotFound(PlayerId),

    /// Player id already registered
    #[error("player {0} is already registered")]
    AlreadyRegistered(PlayerId),

    /// Player is referenced by a tournament that is still running
    #[error("player {player} is a participant of active tournament {tournament}")]
    ActiveTournament {
        player: PlayerId,
        tournament: TournamentId,
    },

    /// Storage failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl PlayerError {
    /// Classification for the transport boundary.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlayerError::NotFound(_) => ErrorKind::NotFound,
            PlayerError::AlreadyRegistered(_) => ErrorKind::Conflict,
            PlayerError::ActiveTournament { .. } => ErrorKind::Conflict,
            PlayerError::Store(_) => ErrorKind::Unavailable,
        }
    }
}

/// Result type for player operations.
pub type PlayerResult<T> = Result<T, PlayerError>;
