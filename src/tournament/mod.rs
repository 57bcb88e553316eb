//! Tournament lifecycle and bracket management.
//!
//! This module owns the core state machine:
//! - Tournament creation and participant admission
//! - Single-elimination bracket generation over power-of-two capacities
//! - Round advancement as game results arrive
//! - Cancellation, aborting any unfinished bracket games
//!
//! ## Example
//!
//! ```no_run
//! use pong_backend::tournament::CreateTournament;
//! use pong_backend::Engine;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = Engine::in_memory();
//!
//!     for id in 1..=4 {
//!         engine.players.register(id, None, None).await?;
//!     }
//!
//!     let tournament = engine
//!         .tournaments
//!         .create(CreateTournament {
//!             capacity: 4,
//!             configuration: serde_json::json!({ "points_to_win": 5 }),
//!             players: vec![1, 2],
//!             created_by: Some(1),
//!         })
//!         .await?;
//!     println!("created tournament: {}", tournament.id);
//!
//!     Ok(())
//! }
//! ```

pub mod bracket;
pub mod errors;
pub mod manager;
pub mod models;

pub use errors::{TournamentError, TournamentResult};
pub use manager::TournamentManager;
pub use models::{
    CreateTournament, Round, SlotResult, SUPPORTED_CAPACITIES, Tournament, TournamentId,
    TournamentState,
};
