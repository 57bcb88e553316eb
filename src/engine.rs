//! Engine facade wiring the managers over one shared store.

use std::sync::Arc;

use crate::game::GameManager;
use crate::locks::EntityLocks;
use crate::player::{PlayerId, PlayerManager};
use crate::ranking::RankingManager;
use crate::store::{EngineStore, MemoryStore};
use crate::tournament::TournamentManager;

/// The engine's full operation surface.
///
/// Construction wires the four managers against a single injected store and
/// shares the per-player lock registry between the registry and the game
/// settlement path, so direct counter edits and finishing games serialize on
/// the same sections.
pub struct Engine {
    pub players: PlayerManager,
    pub games: Arc<GameManager>,
    pub tournaments: TournamentManager,
    pub ranking: RankingManager,
}

impl Engine {
    /// Build an engine over an injected store.
    pub fn new(store: Arc<dyn EngineStore>) -> Self {
        let player_locks: Arc<EntityLocks<PlayerId>> = Arc::new(EntityLocks::new());
        let games = Arc::new(GameManager::new(store.clone(), player_locks.clone()));

        Self {
            players: PlayerManager::new(store.clone(), player_locks),
            tournaments: TournamentManager::new(store.clone(), games.clone()),
            ranking: RankingManager::new(store),
            games,
        }
    }

    /// Build an engine over the in-memory reference store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }
}
