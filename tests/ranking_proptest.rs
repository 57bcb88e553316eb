//! Property-based tests for the ranking aggregator using proptest.
//!
//! These tests verify that the derived ordering is a total order and that
//! pagination partitions it, across randomly generated registries.

use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

use pong_backend::player::{Player, PlayerId};
use pong_backend::ranking::{RankingManager, RankingQuery};
use pong_backend::store::{MemoryStore, PlayerStore};

// Strategy to generate a registry of players with unique ids and arbitrary
// point counters.
fn registry_strategy(max_players: usize) -> impl Strategy<Value = Vec<Player>> {
    prop::collection::hash_set(1i64..500, 0..max_players).prop_flat_map(|ids| {
        let ids: Vec<PlayerId> = ids.into_iter().collect();
        let count = ids.len();
        prop::collection::vec((0u64..1000, 0u64..1000), count).prop_map(move |points| {
            ids.iter()
                .zip(points)
                .map(|(&id, (win_points, lose_points))| {
                    let mut player =
                        Player::new(id, format!("player-{id}"), serde_json::json!({}));
                    player.win_points = win_points;
                    player.lose_points = lose_points;
                    player
                })
                .collect::<Vec<Player>>()
        })
    })
}

fn ranking_over(players: &[Player]) -> RankingManager {
    let store = Arc::new(MemoryStore::new());
    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("build runtime");
    rt.block_on(async {
        for player in players {
            store.insert_player(player).await.unwrap();
        }
    });
    RankingManager::new(store)
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("build runtime")
        .block_on(future)
}

proptest! {
    #[test]
    fn ranking_is_a_total_order(players in registry_strategy(40)) {
        let ranking = ranking_over(&players);
        let page = block_on(ranking.ranking(RankingQuery {
            limit: players.len().max(1),
            page: 1,
            include_top3: false,
        }))
        .unwrap();

        prop_assert_eq!(page.entries.len(), players.len());
        for window in page.entries.windows(2) {
            let (left, right) = (&window[0], &window[1]);
            prop_assert!(
                left.score > right.score
                    || (left.score == right.score && left.player_id < right.player_id),
                "ordering violated: {:?} before {:?}",
                (left.player_id, left.score),
                (right.player_id, right.score)
            );
        }
        for (i, entry) in page.entries.iter().enumerate() {
            prop_assert_eq!(entry.rank, i + 1);
        }
    }

    #[test]
    fn pagination_partitions_the_ordering(
        players in registry_strategy(40),
        limit in 1usize..10,
    ) {
        let ranking = ranking_over(&players);

        let mut collected = Vec::new();
        let mut page_no = 1;
        loop {
            let page = block_on(ranking.ranking(RankingQuery {
                limit,
                page: page_no,
                include_top3: false,
            }))
            .unwrap();
            if page.entries.is_empty() {
                break;
            }
            prop_assert!(page.entries.len() <= limit);
            collected.extend(page.entries.iter().map(|e| e.player_id));
            page_no += 1;
        }

        // No duplicate and no skipped player across pages.
        prop_assert_eq!(collected.len(), players.len());
        let unique: HashSet<_> = collected.iter().copied().collect();
        prop_assert_eq!(unique.len(), players.len());
        let expected: HashSet<_> = players.iter().map(|p| p.id).collect();
        prop_assert_eq!(unique, expected);
    }

    #[test]
    fn player_rank_matches_page_position(players in registry_strategy(20)) {
        prop_assume!(!players.is_empty());
        let ranking = ranking_over(&players);

        let page = block_on(ranking.ranking(RankingQuery {
            limit: players.len(),
            page: 1,
            include_top3: false,
        }))
        .unwrap();

        for entry in &page.entries {
            let rank = block_on(ranking.player_rank(entry.player_id)).unwrap();
            prop_assert_eq!(rank.entry.rank, entry.rank);
            prop_assert_eq!(rank.total_players, players.len());
        }
    }

    #[test]
    fn top3_is_the_head_of_the_ordering(players in registry_strategy(20)) {
        let ranking = ranking_over(&players);

        let full = block_on(ranking.ranking(RankingQuery {
            limit: players.len().max(1),
            page: 1,
            include_top3: true,
        }))
        .unwrap();

        let top3 = full.top3.unwrap();
        prop_assert_eq!(top3.len(), players.len().min(3));
        for (carved, entry) in top3.iter().zip(full.entries.iter()) {
            prop_assert_eq!(carved, entry);
        }
    }
}
