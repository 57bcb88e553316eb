//! Game record store: creation, score updates, atomic settlement.

use std::sync::Arc;

use chrono::Utc;

use super::errors::{GameError, GameResult};
use super::models::{Game, GameFilter, GameId, GameState, GameUpdate};
use crate::locks::EntityLocks;
use crate::player::{Player, PlayerId};
use crate::store::EngineStore;
use crate::tournament::TournamentId;

/// Game record manager.
///
/// Settlement (the transition into `Finished`) updates both players' stat
/// counters and the game record as a single store commit, serialized on the
/// game plus both players so that two finishing games sharing a player never
/// lose an increment.
pub struct GameManager {
    store: Arc<dyn EngineStore>,
    game_locks: EntityLocks<GameId>,
    player_locks: Arc<EntityLocks<PlayerId>>,
}

impl GameManager {
    pub fn new(store: Arc<dyn EngineStore>, player_locks: Arc<EntityLocks<PlayerId>>) -> Self {
        Self {
            store,
            game_locks: EntityLocks::new(),
            player_locks,
        }
    }

    /// Create a pending free-standing game between two distinct players.
    pub async fn create(
        &self,
        player_a_id: PlayerId,
        player_b_id: PlayerId,
    ) -> GameResult<Game> {
        if player_a_id == player_b_id {
            return Err(GameError::SelfMatch(player_a_id));
        }
        for id in [player_a_id, player_b_id] {
            if self.store.find_player(id).await?.is_none() {
                return Err(GameError::UnknownPlayer(id));
            }
        }

        let game = self
            .store
            .create_game(Game::new(0, player_a_id, player_b_id))
            .await?;
        log::info!(
            "created game {} ({} vs {})",
            game.id,
            player_a_id,
            player_b_id
        );
        Ok(game)
    }

    /// Look up a game by id.
    pub async fn get(&self, id: GameId) -> GameResult<Game> {
        self.store
            .find_game(id)
            .await?
            .ok_or(GameError::NotFound(id))
    }

    /// List games matching the filter, in creation order.
    pub async fn list(&self, filter: &GameFilter) -> GameResult<Vec<Game>> {
        Ok(self.store.list_games(filter).await?)
    }

    /// Apply a score/state update to a game.
    ///
    /// Settled games (`Finished` or `Aborted`) reject all mutation; state
    /// only moves forward. A transition into `Finished` requires strictly
    /// unequal scores and settles both players' stats atomically with the
    /// game record.
    pub async fn update(&self, id: GameId, update: GameUpdate) -> GameResult<Game> {
        let _guard = self.game_locks.acquire(id).await;

        let mut game = self
            .store
            .find_game(id)
            .await?
            .ok_or(GameError::NotFound(id))?;

        if game.state.is_terminal() {
            return Err(GameError::AlreadySettled(game.state));
        }
        let next_state = update.state.unwrap_or(game.state);
        if !game.state.can_advance_to(next_state) {
            return Err(GameError::BackwardTransition {
                from: game.state,
                to: next_state,
            });
        }

        if let Some(score) = update.player_a_score {
            game.player_a_score = score;
        }
        if let Some(score) = update.player_b_score {
            game.player_b_score = score;
        }

        if next_state == GameState::Finished {
            self.settle(game).await
        } else {
            game.state = next_state;
            self.store.save_game(&game).await?;
            Ok(game)
        }
    }

    /// Record an already-resolved tournament round game.
    ///
    /// Creates the record tagged with its bracket position and settles it in
    /// the same pass; used by round advancement, where results arrive final.
    pub(crate) async fn record_tournament_game(
        &self,
        tournament_id: TournamentId,
        round_index: u32,
        player_a_id: PlayerId,
        player_b_id: PlayerId,
        player_a_score: u32,
        player_b_score: u32,
    ) -> GameResult<Game> {
        let created = self
            .store
            .create_game(Game::new(0, player_a_id, player_b_id).in_tournament(
                tournament_id,
                round_index,
            ))
            .await?;

        // The record is store-visible from creation on; take its lock like
        // any other mutation before settling.
        let _guard = self.game_locks.acquire(created.id).await;
        let mut game = self
            .store
            .find_game(created.id)
            .await?
            .ok_or(GameError::NotFound(created.id))?;
        if game.state.is_terminal() {
            return Err(GameError::AlreadySettled(game.state));
        }
        game.player_a_score = player_a_score;
        game.player_b_score = player_b_score;
        self.settle(game).await
    }

    /// Abort every unfinished game of a tournament. Returns the aborted ids.
    pub(crate) async fn abort_tournament_games(
        &self,
        tournament_id: TournamentId,
    ) -> GameResult<Vec<GameId>> {
        let filter = GameFilter {
            tournament: Some(tournament_id),
            ..GameFilter::default()
        };

        let mut aborted = Vec::new();
        for game in self.store.list_games(&filter).await? {
            let _guard = self.game_locks.acquire(game.id).await;
            // Reload under the lock; a concurrent update may have settled it.
            let Some(mut game) = self.store.find_game(game.id).await? else {
                continue;
            };
            if game.state.is_terminal() {
                continue;
            }
            game.state = GameState::Aborted;
            self.store.save_game(&game).await?;
            aborted.push(game.id);
        }
        Ok(aborted)
    }

    /// Finish `game` and credit both players, as one store commit.
    ///
    /// Caller must hold the game's lock.
    async fn settle(&self, mut game: Game) -> GameResult<Game> {
        if game.player_a_score == game.player_b_score {
            return Err(GameError::TiedScore(game.player_a_score));
        }

        let _guards = self
            .player_locks
            .acquire_many(vec![game.player_a_id, game.player_b_id])
            .await;

        let mut player_a = self
            .store
            .find_player(game.player_a_id)
            .await?
            .ok_or(GameError::PlayerNotFound(game.player_a_id))?;
        let mut player_b = self
            .store
            .find_player(game.player_b_id)
            .await?
            .ok_or(GameError::PlayerNotFound(game.player_b_id))?;

        game.state = GameState::Finished;
        game.finished_at = Some(Utc::now());

        let (winner, loser) = if game.player_a_score > game.player_b_score {
            credit(&mut player_a, &mut player_b, game.player_a_score, game.player_b_score);
            (player_a, player_b)
        } else {
            credit(&mut player_b, &mut player_a, game.player_b_score, game.player_a_score);
            (player_b, player_a)
        };

        self.store.settle_game(&game, &winner, &loser).await?;

        log::info!(
            "settled game {}: {} beat {} ({}-{})",
            game.id,
            winner.id,
            loser.id,
            game.player_a_score.max(game.player_b_score),
            game.player_a_score.min(game.player_b_score),
        );
        Ok(game)
    }
}

fn credit(winner: &mut Player, loser: &mut Player, winner_score: u32, loser_score: u32) {
    winner.win_count += 1;
    winner.win_points = winner.win_points.saturating_add(u64::from(winner_score));
    loser.lose_count += 1;
    loser.lose_points = loser.lose_points.saturating_add(u64::from(loser_score));
}
