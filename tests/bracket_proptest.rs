//! Property-based tests for bracket math using proptest.

use proptest::prelude::*;
use std::collections::HashSet;

use pong_backend::player::PlayerId;
use pong_backend::tournament::SlotResult;
use pong_backend::tournament::bracket::{pair_entrants, resolve_round};

// Strategy to generate a power-of-two list of distinct entrants in random
// seed order.
fn entrants_strategy() -> impl Strategy<Value = Vec<PlayerId>> {
    prop::sample::select(vec![2usize, 4, 8])
        .prop_flat_map(|size| {
            prop::collection::hash_set(1i64..1000, size).prop_map(|ids| {
                let entrants: Vec<PlayerId> = ids.into_iter().collect();
                entrants
            })
        })
        .prop_shuffle()
}

// Strategy for a full, untied result set over `slots` games, in shuffled
// submission order.
fn results_strategy(slots: usize) -> impl Strategy<Value = Vec<SlotResult>> {
    prop::collection::vec((0u32..10, 0u32..10), slots)
        .prop_map(|scores| {
            scores
                .into_iter()
                .enumerate()
                .map(|(slot, (a, b))| SlotResult {
                    slot,
                    // Nudge ties apart; elimination results are never equal.
                    player_a_score: if a == b { a + 1 } else { a },
                    player_b_score: b,
                })
                .collect::<Vec<_>>()
        })
        .prop_shuffle()
}

proptest! {
    #[test]
    fn pairing_preserves_seed_order(entrants in entrants_strategy()) {
        let pairs = pair_entrants(&entrants);
        prop_assert_eq!(pairs.len(), entrants.len() / 2);

        let flattened: Vec<PlayerId> = pairs
            .iter()
            .flat_map(|&(a, b)| [a, b])
            .collect();
        prop_assert_eq!(flattened, entrants);
    }

    #[test]
    fn resolved_winners_took_the_higher_score(
        (entrants, results) in entrants_strategy()
            .prop_flat_map(|e| {
                let slots = e.len() / 2;
                (Just(e), results_strategy(slots))
            })
    ) {
        let resolved = resolve_round(&entrants, &results).unwrap();
        prop_assert_eq!(resolved.len(), entrants.len() / 2);

        let entrant_set: HashSet<PlayerId> = entrants.iter().copied().collect();
        for (slot, item) in resolved.iter().enumerate() {
            // Slot order restored regardless of submission order.
            prop_assert_eq!(item.slot, slot);
            prop_assert_ne!(item.player_a_score, item.player_b_score);

            let expected = if item.player_a_score > item.player_b_score {
                item.player_a
            } else {
                item.player_b
            };
            prop_assert_eq!(item.winner, expected);
            prop_assert!(entrant_set.contains(&item.winner));
        }
    }

    #[test]
    fn winners_halve_until_a_champion_remains(entrants in entrants_strategy()) {
        // Walk a whole bracket: lower-indexed entrant always wins 5-2.
        let mut field = entrants.clone();
        let mut games_played = 0;
        while field.len() > 1 {
            let results: Vec<SlotResult> = (0..field.len() / 2)
                .map(|slot| SlotResult {
                    slot,
                    player_a_score: 5,
                    player_b_score: 2,
                })
                .collect();
            let resolved = resolve_round(&field, &results).unwrap();
            games_played += resolved.len();
            field = resolved.iter().map(|r| r.winner).collect();
        }

        // A capacity-C single elimination runs exactly C - 1 games.
        prop_assert_eq!(games_played, entrants.len() - 1);
        prop_assert_eq!(field.len(), 1);
        prop_assert_eq!(field[0], entrants[0]);
    }
}
