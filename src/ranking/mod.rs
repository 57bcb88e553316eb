//! Ranking aggregator.
//!
//! Pure read-side computation over the player registry: descending score
//! with ascending-id tie-breaks, 1-indexed pagination, a top-3 carve-out,
//! and per-player rank lookup. Nothing here is cached or stored.

pub mod errors;
pub mod manager;
pub mod models;

pub use errors::{RankingError, RankingResult};
pub use manager::{RankingManager, ScoreFn, default_score};
pub use models::{PlayerRank, RankingEntry, RankingPage, RankingQuery};
