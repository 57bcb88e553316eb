//! In-memory reference store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::{GameStore, PlayerStore, StoreResult, TournamentStore};
use crate::game::{Game, GameFilter, GameId};
use crate::player::{Player, PlayerId};
use crate::tournament::{Tournament, TournamentId};

#[derive(Default)]
struct MemoryState {
    players: HashMap<PlayerId, Player>,
    games: HashMap<GameId, Game>,
    tournaments: HashMap<TournamentId, Tournament>,
    next_game_id: GameId,
}

/// In-memory implementation of the engine's persistence interface.
///
/// All maps live behind a single `RwLock`, which is what makes
/// [`settle_game`](GameStore::settle_game) a single unit: the game and both
/// players change under one write guard, so no reader observes the stats
/// without the finished game or the reverse.
pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                next_game_id: 1,
                ..MemoryState::default()
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlayerStore for MemoryStore {
    async fn insert_player(&self, player: &Player) -> StoreResult<()> {
        let mut state = self.state.write().await;
        state.players.insert(player.id, player.clone());
        Ok(())
    }

    async fn find_player(&self, id: PlayerId) -> StoreResult<Option<Player>> {
        let state = self.state.read().await;
        Ok(state.players.get(&id).cloned())
    }

    async fn list_players(&self) -> StoreResult<Vec<Player>> {
        let state = self.state.read().await;
        let mut players: Vec<Player> = state.players.values().cloned().collect();
        players.sort_by_key(|p| p.id);
        Ok(players)
    }

    async fn save_player(&self, player: &Player) -> StoreResult<()> {
        let mut state = self.state.write().await;
        state.players.insert(player.id, player.clone());
        Ok(())
    }

    async fn delete_player(&self, id: PlayerId) -> StoreResult<()> {
        let mut state = self.state.write().await;
        state.players.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl GameStore for MemoryStore {
    async fn create_game(&self, mut game: Game) -> StoreResult<Game> {
        let mut state = self.state.write().await;
        game.id = state.next_game_id;
        state.next_game_id += 1;
        state.games.insert(game.id, game.clone());
        Ok(game)
    }

    async fn find_game(&self, id: GameId) -> StoreResult<Option<Game>> {
        let state = self.state.read().await;
        Ok(state.games.get(&id).cloned())
    }

    async fn list_games(&self, filter: &GameFilter) -> StoreResult<Vec<Game>> {
        let state = self.state.read().await;
        let mut games: Vec<Game> = state
            .games
            .values()
            .filter(|g| filter.matches(g))
            .cloned()
            .collect();
        games.sort_by_key(|g| g.id);
        Ok(games)
    }

    async fn save_game(&self, game: &Game) -> StoreResult<()> {
        let mut state = self.state.write().await;
        state.games.insert(game.id, game.clone());
        Ok(())
    }

    async fn settle_game(
        &self,
        game: &Game,
        winner: &Player,
        loser: &Player,
    ) -> StoreResult<()> {
        let mut state = self.state.write().await;
        state.games.insert(game.id, game.clone());
        state.players.insert(winner.id, winner.clone());
        state.players.insert(loser.id, loser.clone());
        Ok(())
    }
}

#[async_trait]
impl TournamentStore for MemoryStore {
    async fn insert_tournament(&self, tournament: &Tournament) -> StoreResult<()> {
        let mut state = self.state.write().await;
        state.tournaments.insert(tournament.id, tournament.clone());
        Ok(())
    }

    async fn find_tournament(&self, id: TournamentId) -> StoreResult<Option<Tournament>> {
        let state = self.state.read().await;
        Ok(state.tournaments.get(&id).cloned())
    }

    async fn list_tournaments(&self) -> StoreResult<Vec<Tournament>> {
        let state = self.state.read().await;
        let mut tournaments: Vec<Tournament> = state.tournaments.values().cloned().collect();
        tournaments.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(tournaments)
    }

    async fn save_tournament(&self, tournament: &Tournament) -> StoreResult<()> {
        let mut state = self.state.write().await;
        state.tournaments.insert(tournament.id, tournament.clone());
        Ok(())
    }
}
