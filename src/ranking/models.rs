//! Ranking data models.

use serde::{Deserialize, Serialize};

use crate::player::PlayerId;

/// Leaderboard query parameters. Pagination is 1-indexed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RankingQuery {
    /// Page size, at least 1.
    pub limit: usize,
    /// Page number, at least 1.
    pub page: usize,
    /// Also return the top 3 regardless of the requested page.
    pub include_top3: bool,
}

impl Default for RankingQuery {
    fn default() -> Self {
        Self {
            limit: 10,
            page: 1,
            include_top3: true,
        }
    }
}

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    /// 1-indexed position in the full ordering.
    pub rank: usize,
    pub player_id: PlayerId,
    pub alias: String,
    pub win_count: u64,
    pub lose_count: u64,
    pub win_points: u64,
    pub lose_points: u64,
    /// Value the ordering was computed from.
    pub score: i64,
}

/// One page of the leaderboard, computed against a single registry snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingPage {
    pub entries: Vec<RankingEntry>,
    pub page: usize,
    pub limit: usize,
    /// Size of the full ordering the page was cut from.
    pub total_players: usize,
    /// Top-3 carve-out, present when the query asked for it.
    pub top3: Option<Vec<RankingEntry>>,
}

/// A single player's position in the full ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRank {
    pub entry: RankingEntry,
    pub total_players: usize,
}
