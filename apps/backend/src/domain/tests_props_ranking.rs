//! Property tests for competition ranking.

use proptest::prelude::*;

use crate::domain::scoring::rank_players;

proptest! {
    /// Property: ranks are monotone in the sorted list and the first rank
    /// is always 1.
    #[test]
    fn prop_ranks_are_monotone(
        scores in prop::collection::vec(0u32..100, 1..10),
    ) {
        let entries: Vec<(i64, String, u32)> = scores
            .iter()
            .enumerate()
            .map(|(idx, &score)| (idx as i64 + 1, format!("player-{idx}"), score))
            .collect();

        let ranked = rank_players(entries);

        prop_assert_eq!(ranked[0].rank, 1);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score, "sorted by score descending");
            prop_assert!(pair[0].rank <= pair[1].rank, "ranks never decrease down the list");
        }
    }

    /// Property: competition ranking with gap. Each entry's rank is either
    /// the previous entry's rank (tied score) or its own 1-based position.
    #[test]
    fn prop_gap_consistency(
        scores in prop::collection::vec(0u32..100, 1..10),
    ) {
        let entries: Vec<(i64, String, u32)> = scores
            .iter()
            .enumerate()
            .map(|(idx, &score)| (idx as i64 + 1, format!("player-{idx}"), score))
            .collect();

        let ranked = rank_players(entries);

        for (idx, entry) in ranked.iter().enumerate().skip(1) {
            let prev = &ranked[idx - 1];
            if entry.score == prev.score {
                prop_assert_eq!(entry.rank, prev.rank, "ties share a rank");
            } else {
                prop_assert_eq!(entry.rank as usize, idx + 1, "distinct score takes its position");
            }
        }
    }
}
