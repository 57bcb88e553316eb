//! Pure bracket math for single-elimination rounds.
//!
//! Pairing is by adjacent position in seed/advancement order: slot `k` plays
//! entrant `2k` against entrant `2k+1`. Capacities are powers of two, so a
//! bye is impossible by construction.

use super::errors::TournamentError;
use super::models::{SUPPORTED_CAPACITIES, SlotResult};
use crate::player::PlayerId;

/// Whether the engine supports brackets of this size.
pub fn is_supported_capacity(capacity: usize) -> bool {
    SUPPORTED_CAPACITIES.contains(&capacity)
}

/// Pair entrants into slots: `(2k, 2k+1)` for slot `k`.
pub fn pair_entrants(entrants: &[PlayerId]) -> Vec<(PlayerId, PlayerId)> {
    entrants
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .collect()
}

/// A round slot with its final scores and resolved winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSlot {
    pub slot: usize,
    pub player_a: PlayerId,
    pub player_b: PlayerId,
    pub player_a_score: u32,
    pub player_b_score: u32,
    pub winner: PlayerId,
}

/// Match submitted results against the round's pairing.
///
/// Every slot must be covered exactly once and every score pair must be
/// strictly unequal; elimination rounds admit no draws. Resolved slots come
/// back in slot order, so their winners are the next round's seed order.
pub fn resolve_round(
    entrants: &[PlayerId],
    results: &[SlotResult],
) -> Result<Vec<ResolvedSlot>, TournamentError> {
    let pairs = pair_entrants(entrants);

    if results.len() != pairs.len() {
        return Err(TournamentError::SlotCountMismatch {
            expected: pairs.len(),
            actual: results.len(),
        });
    }

    let mut covered = vec![false; pairs.len()];
    for result in results {
        match covered.get_mut(result.slot) {
            None => {
                return Err(TournamentError::UnknownSlot {
                    slot: result.slot,
                    slots: pairs.len(),
                });
            }
            Some(true) => return Err(TournamentError::DuplicateSlot(result.slot)),
            Some(seen) => *seen = true,
        }
    }

    // Equal lengths with unique in-range slots: coverage is total.
    let mut ordered = results.to_vec();
    ordered.sort_by_key(|result| result.slot);

    let mut resolved = Vec::with_capacity(pairs.len());
    for ((player_a, player_b), result) in pairs.into_iter().zip(&ordered) {
        let slot = result.slot;
        if result.player_a_score == result.player_b_score {
            return Err(TournamentError::TiedScore { slot });
        }
        let winner = if result.player_a_score > result.player_b_score {
            player_a
        } else {
            player_b
        };
        resolved.push(ResolvedSlot {
            slot,
            player_a,
            player_b,
            player_a_score: result.player_a_score,
            player_b_score: result.player_b_score,
            winner,
        });
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(slot: usize, a: u32, b: u32) -> SlotResult {
        SlotResult {
            slot,
            player_a_score: a,
            player_b_score: b,
        }
    }

    #[test]
    fn supported_capacities_are_four_and_eight() {
        assert!(is_supported_capacity(4));
        assert!(is_supported_capacity(8));
        assert!(!is_supported_capacity(2));
        assert!(!is_supported_capacity(6));
        assert!(!is_supported_capacity(16));
    }

    #[test]
    fn pairs_adjacent_seeds() {
        assert_eq!(pair_entrants(&[1, 2, 3, 4]), vec![(1, 2), (3, 4)]);
        assert_eq!(pair_entrants(&[5, 9]), vec![(5, 9)]);
    }

    #[test]
    fn resolves_winners_in_slot_order() {
        let resolved =
            resolve_round(&[1, 2, 3, 4], &[result(1, 1, 5), result(0, 5, 3)]).unwrap();

        let winners: Vec<_> = resolved.iter().map(|r| r.winner).collect();
        assert_eq!(winners, vec![1, 4]);
        assert_eq!(resolved[0].slot, 0);
        assert_eq!(resolved[1].player_a, 3);
    }

    #[test]
    fn rejects_missing_and_duplicate_slots() {
        let err = resolve_round(&[1, 2, 3, 4], &[result(0, 5, 3)]).unwrap_err();
        assert!(matches!(
            err,
            TournamentError::SlotCountMismatch {
                expected: 2,
                actual: 1
            }
        ));

        let err =
            resolve_round(&[1, 2, 3, 4], &[result(0, 5, 3), result(0, 5, 1)]).unwrap_err();
        assert!(matches!(err, TournamentError::DuplicateSlot(0)));

        let err =
            resolve_round(&[1, 2, 3, 4], &[result(0, 5, 3), result(2, 5, 1)]).unwrap_err();
        assert!(matches!(err, TournamentError::UnknownSlot { slot: 2, slots: 2 }));
    }

    #[test]
    fn rejects_tied_scores() {
        let err =
            resolve_round(&[1, 2, 3, 4], &[result(0, 3, 3), result(1, 5, 1)]).unwrap_err();
        assert!(matches!(err, TournamentError::TiedScore { slot: 0 }));
    }
}
