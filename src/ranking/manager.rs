//! Ranking aggregator: derived leaderboards over the player registry.

use std::sync::Arc;

use super::errors::{RankingError, RankingResult};
use super::models::{PlayerRank, RankingEntry, RankingPage, RankingQuery};
use crate::player::{Player, PlayerId};
use crate::store::EngineStore;

/// Scoring function used to order the leaderboard.
pub type ScoreFn = dyn Fn(&Player) -> i64 + Send + Sync;

/// Default score: points scored in wins minus points conceded in losses.
pub fn default_score(player: &Player) -> i64 {
    player.win_points as i64 - player.lose_points as i64
}

/// Ranking aggregator.
///
/// Rank is never stored. Each request takes one snapshot of the player
/// registry and computes the full ordering from it, so pagination within a
/// request cannot drift; two requests may of course observe different
/// registries.
pub struct RankingManager {
    store: Arc<dyn EngineStore>,
    score: Arc<ScoreFn>,
}

impl RankingManager {
    pub fn new(store: Arc<dyn EngineStore>) -> Self {
        Self {
            store,
            score: Arc::new(default_score),
        }
    }

    /// Replace the scoring function.
    pub fn with_scoring(
        store: Arc<dyn EngineStore>,
        score: impl Fn(&Player) -> i64 + Send + Sync + 'static,
    ) -> Self {
        Self {
            store,
            score: Arc::new(score),
        }
    }

    /// Compute one leaderboard page.
    pub async fn ranking(&self, query: RankingQuery) -> RankingResult<RankingPage> {
        if query.limit < 1 {
            return Err(RankingError::InvalidLimit(query.limit));
        }
        if query.page < 1 {
            return Err(RankingError::InvalidPage(query.page));
        }

        let ordering = self.full_ordering().await?;
        let total_players = ordering.len();

        let start = (query.page - 1).saturating_mul(query.limit);
        let entries: Vec<RankingEntry> = ordering
            .iter()
            .skip(start)
            .take(query.limit)
            .cloned()
            .collect();
        let top3 = query
            .include_top3
            .then(|| ordering.iter().take(3).cloned().collect());

        Ok(RankingPage {
            entries,
            page: query.page,
            limit: query.limit,
            total_players,
            top3,
        })
    }

    /// A single player's 1-indexed rank and stat snapshot.
    pub async fn player_rank(&self, player_id: PlayerId) -> RankingResult<PlayerRank> {
        let ordering = self.full_ordering().await?;
        let total_players = ordering.len();

        ordering
            .into_iter()
            .find(|entry| entry.player_id == player_id)
            .map(|entry| PlayerRank {
                entry,
                total_players,
            })
            .ok_or(RankingError::PlayerNotFound(player_id))
    }

    /// Total order over one registry snapshot: descending score, ties broken
    /// by ascending player id.
    async fn full_ordering(&self) -> RankingResult<Vec<RankingEntry>> {
        let mut players = self.store.list_players().await?;
        players.sort_by(|a, b| {
            (self.score)(b)
                .cmp(&(self.score)(a))
                .then(a.id.cmp(&b.id))
        });

        Ok(players
            .into_iter()
            .enumerate()
            .map(|(i, player)| RankingEntry {
                rank: i + 1,
                score: (self.score)(&player),
                player_id: player.id,
                alias: player.alias,
                win_count: player.win_count,
                lose_count: player.lose_count,
                win_points: player.win_points,
                lose_points: player.lose_points,
            })
            .collect())
    }
}
