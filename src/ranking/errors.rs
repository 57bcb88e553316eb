//! Ranking error types.

use thiserror::Error;

use crate::errors::ErrorKind;
use crate::player::PlayerId;
use crate::store::StoreError;

/// Ranking errors.
#[derive(Debug, Error)]
pub enum RankingError {
    /// Player not found
    #[error("player not found: {0}")]
    PlayerNotFound(PlayerId),

    /// Page size must be at least 1
    #[error("invalid limit: {0}")]
    InvalidLimit(usize),

    /// Page number must be at least 1
    #[error("invalid page: {0}")]
    InvalidPage(usize),

    /// Storage failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl RankingError {
    /// Classification for the transport boundary.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RankingError::PlayerNotFound(_) => ErrorKind::NotFound,
            RankingError::InvalidLimit(_) | RankingError::InvalidPage(_) => {
                ErrorKind::InvalidArgument
            }
            RankingError::Store(_) => ErrorKind::Unavailable,
        }
    }
}

/// Result type for ranking operations.
pub type RankingResult<T> = Result<T, RankingError>;
