//! Injected persistence interface.
//!
//! The engine performs no I/O of its own; every entity read and write goes
//! through the traits in this module. Implementations must be atomic at the
//! single-entity granularity, and [`GameStore::settle_game`] must commit one
//! finished game together with both updated players as a single unit.
//!
//! [`MemoryStore`] is the reference implementation shipped with the crate.

use async_trait::async_trait;
use thiserror::Error;

use crate::game::{Game, GameFilter, GameId};
use crate::player::{Player, PlayerId};
use crate::tournament::{Tournament, TournamentId};

pub mod memory;

pub use memory::MemoryStore;

/// Storage-layer failure.
///
/// Deliberately opaque: the engine reports it as `Unavailable` and never
/// interprets it, retries it, or conflates it with a state conflict.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not serve the request.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Player persistence operations.
#[async_trait]
pub trait PlayerStore: Send + Sync {
    /// Insert a newly registered player.
    async fn insert_player(&self, player: &Player) -> StoreResult<()>;

    /// Find a player by id.
    async fn find_player(&self, id: PlayerId) -> StoreResult<Option<Player>>;

    /// Snapshot of every registered player.
    ///
    /// The ranking aggregator computes its full ordering from one such
    /// snapshot, so a single call must observe a consistent registry.
    async fn list_players(&self) -> StoreResult<Vec<Player>>;

    /// Persist a player's current state (alias, configuration, counters).
    async fn save_player(&self, player: &Player) -> StoreResult<()>;

    /// Remove a player.
    async fn delete_player(&self, id: PlayerId) -> StoreResult<()>;
}

/// Game persistence operations.
#[async_trait]
pub trait GameStore: Send + Sync {
    /// Insert a new game, assigning its id. Returns the stored record.
    async fn create_game(&self, game: Game) -> StoreResult<Game>;

    /// Find a game by id.
    async fn find_game(&self, id: GameId) -> StoreResult<Option<Game>>;

    /// List games matching the filter, in creation order.
    async fn list_games(&self, filter: &GameFilter) -> StoreResult<Vec<Game>>;

    /// Persist a game's current state.
    async fn save_game(&self, game: &Game) -> StoreResult<()>;

    /// Commit a finished game and both updated players as one unit.
    ///
    /// A crash inside the store must never leave the stats updated without
    /// the game marked finished, or the reverse.
    async fn settle_game(
        &self,
        game: &Game,
        winner: &Player,
        loser: &Player,
    ) -> StoreResult<()>;
}

/// Tournament persistence operations.
#[async_trait]
pub trait TournamentStore: Send + Sync {
    /// Insert a newly created tournament.
    async fn insert_tournament(&self, tournament: &Tournament) -> StoreResult<()>;

    /// Find a tournament by id.
    async fn find_tournament(&self, id: TournamentId) -> StoreResult<Option<Tournament>>;

    /// List all tournaments, newest first.
    async fn list_tournaments(&self) -> StoreResult<Vec<Tournament>>;

    /// Persist a tournament's current state.
    async fn save_tournament(&self, tournament: &Tournament) -> StoreResult<()>;
}

/// The full persistence surface the engine is wired against.
pub trait EngineStore: PlayerStore + GameStore + TournamentStore {}

impl<T> EngineStore for T where T: PlayerStore + GameStore + TournamentStore {}
