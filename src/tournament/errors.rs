//! Tournament engine error types.

use thiserror::Error;

use super::models::{TournamentId, TournamentState};
use crate::errors::ErrorKind;
use crate::game::GameError;
use crate::player::PlayerId;
use crate::store::StoreError;

/// Tournament errors.
#[derive(Debug, Error)]
pub enum TournamentError {
    /// Tournament not found
    #[error("tournament not found: {0}")]
    NotFound(TournamentId),

    /// Referenced player not found
    #[error("player not found: {0}")]
    PlayerNotFound(PlayerId),

    /// Creation request names a player that does not exist
    #[error("no such player: {0}")]
    UnknownPlayer(PlayerId),

    /// Capacity is not a supported bracket size
    #[error("unsupported bracket capacity: {0}")]
    UnsupportedCapacity(usize),

    /// A player appears twice in the initial list
    #[error("player {0} listed more than once")]
    DuplicatePlayer(PlayerId),

    /// Initial player list exceeds capacity
    #[error("{given} players given for a capacity-{capacity} bracket")]
    TooManyPlayers { given: usize, capacity: usize },

    /// Join attempted outside the open state
    #[error("registration is closed (tournament is {0})")]
    RegistrationClosed(TournamentState),

    /// The player already joined this tournament
    #[error("player {0} already joined")]
    AlreadyJoined(PlayerId),

    /// No seats left
    #[error("tournament is full")]
    TournamentFull,

    /// Operation incompatible with the current state
    #[error("tournament not in correct state: expected {expected}, got {actual}")]
    InvalidState {
        expected: TournamentState,
        actual: TournamentState,
    },

    /// Cancel attempted on a tournament that already reached a terminal state
    #[error("tournament is already {0}")]
    AlreadyOver(TournamentState),

    /// Advancement names a round other than the pending one
    #[error("wrong round: expected {expected}, got {actual}")]
    WrongRound { expected: u32, actual: u32 },

    /// Results do not cover the round's slots
    #[error("round has {expected} slots, {actual} results given")]
    SlotCountMismatch { expected: usize, actual: usize },

    /// Result names a slot outside the round
    #[error("slot {slot} out of range for a {slots}-slot round")]
    UnknownSlot { slot: usize, slots: usize },

    /// Two results name the same slot
    #[error("slot {0} given more than once")]
    DuplicateSlot(usize),

    /// Elimination rounds admit no draws
    #[error("slot {slot} ended in a tie")]
    TiedScore { slot: usize },

    /// Failure while recording a round game
    #[error(transparent)]
    Game(#[from] GameError),

    /// Storage failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl TournamentError {
    /// Classification for the transport boundary.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TournamentError::NotFound(_) | TournamentError::PlayerNotFound(_) => {
                ErrorKind::NotFound
            }
            TournamentError::UnknownPlayer(_)
            | TournamentError::UnsupportedCapacity(_)
            | TournamentError::DuplicatePlayer(_)
            | TournamentError::TooManyPlayers { .. }
            | TournamentError::WrongRound { .. }
            | TournamentError::SlotCountMismatch { .. }
            | TournamentError::UnknownSlot { .. }
            | TournamentError::DuplicateSlot(_)
            | TournamentError::TiedScore { .. } => ErrorKind::InvalidArgument,
            TournamentError::RegistrationClosed(_)
            | TournamentError::AlreadyJoined(_)
            | TournamentError::TournamentFull
            | TournamentError::InvalidState { .. }
            | TournamentError::AlreadyOver(_) => ErrorKind::Conflict,
            TournamentError::Game(e) => e.kind(),
            TournamentError::Store(_) => ErrorKind::Unavailable,
        }
    }
}

/// Result type for tournament operations.
pub type TournamentResult<T> = Result<T, TournamentError>;
