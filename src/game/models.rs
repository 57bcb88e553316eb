//! Game data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::player::PlayerId;
use crate::tournament::TournamentId;

/// Game ID type. Assigned by the store on insertion.
pub type GameId = i64;

/// Lifecycle state of a game. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    /// Created, not yet started.
    Pending,
    /// Being played; scores may still change.
    InProgress,
    /// Settled with final scores. Immutable.
    Finished,
    /// Abandoned without a result (tournament cancellation, cleanup).
    Aborted,
}

impl GameState {
    /// Terminal states accept no further mutation.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameState::Finished | GameState::Aborted)
    }

    /// Whether a transition to `next` moves forward.
    ///
    /// Staying in the same non-terminal state is allowed (score updates on a
    /// running game); the only forbidden direction is back towards `Pending`.
    pub fn can_advance_to(self, next: GameState) -> bool {
        if self.is_terminal() {
            return false;
        }
        !matches!((self, next), (GameState::InProgress, GameState::Pending))
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameState::Pending => "pending",
            GameState::InProgress => "in_progress",
            GameState::Finished => "finished",
            GameState::Aborted => "aborted",
        };
        write!(f, "{name}")
    }
}

/// A single match between two players.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub player_a_id: PlayerId,
    pub player_b_id: PlayerId,
    pub player_a_score: u32,
    pub player_b_score: u32,
    pub state: GameState,
    /// Set when the game belongs to a tournament bracket.
    pub tournament_id: Option<TournamentId>,
    /// Round position within the bracket, 0-indexed.
    pub round_index: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl Game {
    /// Create a pending free-standing game. The store assigns the real id.
    pub fn new(id: GameId, player_a_id: PlayerId, player_b_id: PlayerId) -> Self {
        Self {
            id,
            player_a_id,
            player_b_id,
            player_a_score: 0,
            player_b_score: 0,
            state: GameState::Pending,
            tournament_id: None,
            round_index: None,
            created_at: Utc::now(),
            finished_at: None,
        }
    }

    /// Tag the game as part of a tournament round.
    pub fn in_tournament(mut self, tournament_id: TournamentId, round_index: u32) -> Self {
        self.tournament_id = Some(tournament_id);
        self.round_index = Some(round_index);
        self
    }

    /// Winner of a finished game, by strict score comparison.
    pub fn winner_id(&self) -> Option<PlayerId> {
        if self.state != GameState::Finished {
            return None;
        }
        if self.player_a_score > self.player_b_score {
            Some(self.player_a_id)
        } else if self.player_b_score > self.player_a_score {
            Some(self.player_b_id)
        } else {
            None
        }
    }
}

/// Partial update for a game, mirroring the boundary's PATCH body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameUpdate {
    pub player_a_score: Option<u32>,
    pub player_b_score: Option<u32>,
    pub state: Option<GameState>,
}

/// Filter for game listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameFilter {
    /// Games where the player appears on either side.
    pub player: Option<PlayerId>,
    /// Games belonging to a tournament.
    pub tournament: Option<TournamentId>,
}

impl GameFilter {
    pub fn matches(&self, game: &Game) -> bool {
        if let Some(player) = self.player
            && game.player_a_id != player
            && game.player_b_id != player
        {
            return false;
        }
        if let Some(tournament) = self.tournament && game.tournament_id != Some(tournament) {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_progression_is_forward_only() {
        assert!(GameState::Pending.can_advance_to(GameState::InProgress));
        assert!(GameState::Pending.can_advance_to(GameState::Finished));
        assert!(GameState::Pending.can_advance_to(GameState::Aborted));
        assert!(GameState::InProgress.can_advance_to(GameState::InProgress));
        assert!(GameState::InProgress.can_advance_to(GameState::Finished));

        assert!(!GameState::InProgress.can_advance_to(GameState::Pending));
        assert!(!GameState::Finished.can_advance_to(GameState::InProgress));
        assert!(!GameState::Finished.can_advance_to(GameState::Finished));
        assert!(!GameState::Aborted.can_advance_to(GameState::Pending));
    }

    #[test]
    fn winner_requires_finished_state_and_unequal_scores() {
        let mut game = Game::new(1, 10, 20);
        game.player_a_score = 5;
        game.player_b_score = 3;
        assert_eq!(game.winner_id(), None);

        game.state = GameState::Finished;
        assert_eq!(game.winner_id(), Some(10));

        game.player_b_score = 5;
        assert_eq!(game.winner_id(), None);
    }

    #[test]
    fn filter_matches_either_side() {
        let game = Game::new(1, 10, 20);
        let by_a = GameFilter {
            player: Some(10),
            ..GameFilter::default()
        };
        let by_b = GameFilter {
            player: Some(20),
            ..GameFilter::default()
        };
        let by_other = GameFilter {
            player: Some(30),
            ..GameFilter::default()
        };
        assert!(by_a.matches(&game));
        assert!(by_b.matches(&game));
        assert!(!by_other.matches(&game));
    }
}
