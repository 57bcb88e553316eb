//! # Pong Backend
//!
//! Tournament lifecycle and bracket management engine for a multiplayer pong
//! game: players register, play one-off games, and join single-elimination
//! tournaments whose results feed a global ranking.
//!
//! The crate is the engine only. Requests arrive already authenticated and
//! validated as typed operations; transport, auth, and rendering are external
//! collaborators, and persistence is an injected store (an in-memory
//! reference implementation ships with the crate).
//!
//! ## Architecture
//!
//! A tournament moves through five states:
//!
//! - **Open**: accepting joins
//! - **Full**: at capacity; the participant list is frozen
//! - **InProgress**: bracket rounds resolving, losers eliminated
//! - **Completed**: final game done, champion recorded
//! - **Cancelled**: terminated early; unfinished games aborted
//!
//! Mutations to one tournament are serialized through a per-entity critical
//! section, as are the stat updates a finishing game applies to its two
//! players. Unrelated entities never wait on each other.
//!
//! ## Core Modules
//!
//! - [`player`]: player registry and cumulative stats
//! - [`game`]: game records with monotonic lifecycle and atomic settlement
//! - [`tournament`]: the bracket state machine
//! - [`ranking`]: derived leaderboards and per-player rank
//! - [`store`]: the injected persistence interface
//!
//! ## Example
//!
//! ```no_run
//! use pong_backend::Engine;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = Engine::in_memory();
//!
//!     engine.players.register(1, Some("ada".to_string()), None).await?;
//!     engine.players.register(2, Some("grace".to_string()), None).await?;
//!
//!     let game = engine.games.create(1, 2).await?;
//!     println!("created game: {}", game.id);
//!
//!     Ok(())
//! }
//! ```

pub mod engine;
pub use engine::Engine;

/// Shared error classification.
pub mod errors;
pub use errors::ErrorKind;

/// Per-entity critical sections.
pub mod locks;

/// Injected persistence interface and the in-memory reference store.
pub mod store;
pub use store::{EngineStore, MemoryStore, StoreError, StoreResult};

/// Player registry.
pub mod player;
pub use player::{Player, PlayerError, PlayerId, PlayerManager};

/// Game record store.
pub mod game;
pub use game::{Game, GameError, GameId, GameManager, GameState};

/// Tournament lifecycle and bracket management.
pub mod tournament;
pub use tournament::{
    CreateTournament, SlotResult, Tournament, TournamentError, TournamentId, TournamentManager,
    TournamentState,
};

/// Ranking aggregator.
pub mod ranking;
pub use ranking::{RankingManager, RankingPage, RankingQuery};
