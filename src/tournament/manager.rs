//! Tournament manager: admission, bracket advancement, cancellation.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use super::bracket;
use super::errors::{TournamentError, TournamentResult};
use super::models::{
    CreateTournament, Round, SlotResult, Tournament, TournamentId, TournamentState,
};
use crate::game::GameManager;
use crate::locks::EntityLocks;
use crate::player::PlayerId;
use crate::store::EngineStore;

/// Tournament manager.
///
/// Every mutation of a tournament runs inside that tournament's exclusive
/// section, so joins racing for the last seat, advancement requests, and
/// cancellations on the same tournament never interleave. Operations on
/// different tournaments proceed fully in parallel.
pub struct TournamentManager {
    store: Arc<dyn EngineStore>,
    games: Arc<GameManager>,
    locks: EntityLocks<TournamentId>,
}

impl TournamentManager {
    pub fn new(store: Arc<dyn EngineStore>, games: Arc<GameManager>) -> Self {
        Self {
            store,
            games,
            locks: EntityLocks::new(),
        }
    }

    /// Create a tournament, seeding participants in the given order.
    ///
    /// Starts `Full` when the initial list already meets capacity, otherwise
    /// `Open`.
    pub async fn create(&self, request: CreateTournament) -> TournamentResult<Tournament> {
        if !bracket::is_supported_capacity(request.capacity) {
            return Err(TournamentError::UnsupportedCapacity(request.capacity));
        }
        if request.players.len() > request.capacity {
            return Err(TournamentError::TooManyPlayers {
                given: request.players.len(),
                capacity: request.capacity,
            });
        }

        let mut seen = HashSet::new();
        for &player in &request.players {
            if !seen.insert(player) {
                return Err(TournamentError::DuplicatePlayer(player));
            }
            if self.store.find_player(player).await?.is_none() {
                return Err(TournamentError::UnknownPlayer(player));
            }
        }

        let state = if request.players.len() == request.capacity {
            TournamentState::Full
        } else {
            TournamentState::Open
        };
        let tournament = Tournament {
            id: Uuid::new_v4(),
            configuration: request.configuration,
            capacity: request.capacity,
            participants: request.players,
            rounds: Vec::new(),
            state,
            champion_id: None,
            created_by: request.created_by,
            created_at: Utc::now(),
        };
        self.store.insert_tournament(&tournament).await?;

        log::info!(
            "created tournament {} (capacity {}, {} seeded, {})",
            tournament.id,
            tournament.capacity,
            tournament.participants.len(),
            tournament.state,
        );
        Ok(tournament)
    }

    /// Admit a player into an open tournament.
    ///
    /// The append and the `Open → Full` transition happen atomically inside
    /// the tournament's exclusive section: there is no window where the last
    /// seat is taken but the state still reads `Open`, and concurrent joins
    /// racing for that seat admit exactly one player.
    pub async fn join(
        &self,
        tournament_id: TournamentId,
        player_id: PlayerId,
    ) -> TournamentResult<Tournament> {
        let _guard = self.locks.acquire(tournament_id).await;

        let mut tournament = self.find(tournament_id).await?;
        if tournament.state != TournamentState::Open {
            return Err(TournamentError::RegistrationClosed(tournament.state));
        }
        if tournament.participants.contains(&player_id) {
            return Err(TournamentError::AlreadyJoined(player_id));
        }
        if tournament.participants.len() >= tournament.capacity {
            return Err(TournamentError::TournamentFull);
        }
        if self.store.find_player(player_id).await?.is_none() {
            return Err(TournamentError::PlayerNotFound(player_id));
        }

        tournament.participants.push(player_id);
        if tournament.participants.len() == tournament.capacity {
            tournament.state = TournamentState::Full;
            log::info!("tournament {} is full", tournament.id);
        }
        self.store.save_tournament(&tournament).await?;

        Ok(tournament)
    }

    /// Resolve the pending round and advance the bracket.
    ///
    /// The first advancement request (round 0, on a `Full` tournament) is
    /// what moves the tournament into `InProgress`. Each resolved slot
    /// becomes a finished game settled against both players' stats; the
    /// winners seed the next round. Resolving the final round records the
    /// champion and completes the tournament.
    pub async fn advance_round(
        &self,
        tournament_id: TournamentId,
        round_index: u32,
        results: &[SlotResult],
    ) -> TournamentResult<Tournament> {
        let _guard = self.locks.acquire(tournament_id).await;

        let mut tournament = self.find(tournament_id).await?;
        match tournament.state {
            TournamentState::Full | TournamentState::InProgress => {}
            actual => {
                return Err(TournamentError::InvalidState {
                    expected: TournamentState::InProgress,
                    actual,
                });
            }
        }

        let expected = tournament.pending_round_index();
        if round_index != expected {
            return Err(TournamentError::WrongRound {
                expected,
                actual: round_index,
            });
        }

        let entrants = tournament.pending_round_entrants();
        let resolved = bracket::resolve_round(&entrants, results)?;

        let mut game_ids = Vec::with_capacity(resolved.len());
        let mut winner_ids = Vec::with_capacity(resolved.len());
        for slot in &resolved {
            let game = self
                .games
                .record_tournament_game(
                    tournament.id,
                    round_index,
                    slot.player_a,
                    slot.player_b,
                    slot.player_a_score,
                    slot.player_b_score,
                )
                .await?;
            game_ids.push(game.id);
            winner_ids.push(slot.winner);
        }

        tournament.rounds.push(Round {
            index: round_index,
            game_ids,
            winner_ids: winner_ids.clone(),
        });

        if winner_ids.len() == 1 {
            tournament.state = TournamentState::Completed;
            tournament.champion_id = Some(winner_ids[0]);
            log::info!(
                "tournament {} completed, champion {}",
                tournament.id,
                winner_ids[0]
            );
        } else {
            tournament.state = TournamentState::InProgress;
            log::info!(
                "tournament {} advanced past round {} ({} remain)",
                tournament.id,
                round_index,
                winner_ids.len()
            );
        }
        self.store.save_tournament(&tournament).await?;

        Ok(tournament)
    }

    /// Cancel a tournament.
    ///
    /// Terminal for the tournament; every not-yet-finished game under it is
    /// marked aborted. Already-finished games and the stats they settled are
    /// left untouched. Authorizing the requester (creator or administrator)
    /// is the boundary's job.
    pub async fn cancel(&self, tournament_id: TournamentId) -> TournamentResult<Tournament> {
        let _guard = self.locks.acquire(tournament_id).await;

        let mut tournament = self.find(tournament_id).await?;
        if tournament.state.is_terminal() {
            return Err(TournamentError::AlreadyOver(tournament.state));
        }

        tournament.state = TournamentState::Cancelled;
        self.store.save_tournament(&tournament).await?;

        let aborted = self.games.abort_tournament_games(tournament.id).await?;
        log::info!(
            "cancelled tournament {} ({} games aborted)",
            tournament.id,
            aborted.len()
        );

        Ok(tournament)
    }

    /// Look up a tournament by id.
    pub async fn get(&self, tournament_id: TournamentId) -> TournamentResult<Tournament> {
        self.find(tournament_id).await
    }

    /// List all tournaments, newest first.
    pub async fn list(&self) -> TournamentResult<Vec<Tournament>> {
        Ok(self.store.list_tournaments().await?)
    }

    async fn find(&self, tournament_id: TournamentId) -> TournamentResult<Tournament> {
        self.store
            .find_tournament(tournament_id)
            .await?
            .ok_or(TournamentError::NotFound(tournament_id))
    }
}
