//! Tournament data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::game::GameId;
use crate::player::PlayerId;

/// Tournament ID type.
pub type TournamentId = Uuid;

/// Bracket sizes the engine accepts.
pub const SUPPORTED_CAPACITIES: [usize; 2] = [4, 8];

/// Tournament lifecycle state.
///
/// Progresses `Open → Full → InProgress → Completed`, or diverts once to
/// `Cancelled`; never regresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentState {
    /// Accepting joins.
    Open,
    /// At capacity, waiting for the first advancement request.
    Full,
    /// Bracket running.
    InProgress,
    /// Final game resolved; champion recorded.
    Completed,
    /// Cancelled by the creator or an administrator.
    Cancelled,
}

impl TournamentState {
    /// Terminal states reject all further mutation.
    pub fn is_terminal(self) -> bool {
        matches!(self, TournamentState::Completed | TournamentState::Cancelled)
    }
}

impl std::fmt::Display for TournamentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TournamentState::Open => "open",
            TournamentState::Full => "full",
            TournamentState::InProgress => "in_progress",
            TournamentState::Completed => "completed",
            TournamentState::Cancelled => "cancelled",
        };
        write!(f, "{name}")
    }
}

/// One resolved bracket round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// Round position, 0-indexed.
    pub index: u32,
    /// Games created for this round, in slot order.
    pub game_ids: Vec<GameId>,
    /// Winners in slot order; the seed order of the next round.
    pub winner_ids: Vec<PlayerId>,
}

/// A single-elimination tournament.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    /// Game rule set (points to win, serve delay, cosmetics). Opaque to the
    /// engine; stored as-is and handed to the game service.
    pub configuration: serde_json::Value,
    /// Bracket size; power of two.
    pub capacity: usize,
    /// Admitted players, insertion order = seed order.
    pub participants: Vec<PlayerId>,
    /// Resolved rounds, oldest first.
    pub rounds: Vec<Round>,
    pub state: TournamentState,
    /// Sole survivor of the final round.
    pub champion_id: Option<PlayerId>,
    /// Creator, kept for the boundary's cancellation authorization.
    pub created_by: Option<PlayerId>,
    pub created_at: DateTime<Utc>,
}

impl Tournament {
    /// Index of the next round awaiting results.
    pub fn pending_round_index(&self) -> u32 {
        self.rounds.len() as u32
    }

    /// Entrants of the pending round: seeds for round 0, previous winners
    /// afterwards.
    pub fn pending_round_entrants(&self) -> Vec<PlayerId> {
        match self.rounds.last() {
            Some(round) => round.winner_ids.clone(),
            None => self.participants.clone(),
        }
    }

    /// Total number of rounds a full bracket plays.
    pub fn total_rounds(&self) -> u32 {
        self.capacity.trailing_zeros()
    }
}

/// Typed request to create a tournament.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTournament {
    /// Bracket size; must be one of [`SUPPORTED_CAPACITIES`].
    pub capacity: usize,
    /// Opaque game rule set.
    pub configuration: serde_json::Value,
    /// Initial participants in seed order; may already meet capacity.
    pub players: Vec<PlayerId>,
    /// Creating player, if the boundary knows one.
    pub created_by: Option<PlayerId>,
}

/// Final score for one slot of a round, supplied with an advancement request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SlotResult {
    /// Slot position within the round, 0-indexed.
    pub slot: usize,
    /// Score of the slot's first (lower-seeded) player.
    pub player_a_score: u32,
    /// Score of the slot's second player.
    pub player_b_score: u32,
}
