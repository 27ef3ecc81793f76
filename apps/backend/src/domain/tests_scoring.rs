use crate::domain::scoring::{award_success, compute_rankings, rank_players};
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{make_game_state, test_rules, MakeGameStateArgs};

fn entries(scores: &[(i64, u32)]) -> Vec<(i64, String, u32)> {
    scores
        .iter()
        .map(|&(id, score)| (id, format!("player-{id}"), score))
        .collect()
}

#[test]
fn award_success_adds_configured_points() {
    let rules = test_rules();
    let mut state = make_game_state(2, MakeGameStateArgs::default());

    award_success(&mut state, &rules, 1);
    award_success(&mut state, &rules, 1);

    assert_eq!(state.player_states.get(&1).unwrap().score, 2 * rules.success_points);
    assert_eq!(state.player_states.get(&2).unwrap().score, 0);
}

#[test]
fn award_success_for_unknown_player_is_a_noop() {
    let rules = test_rules();
    let mut state = make_game_state(2, MakeGameStateArgs::default());
    award_success(&mut state, &rules, 99);
    assert!(state.player_states.values().all(|s| s.score == 0));
}

#[test]
fn ranking_ties_share_rank() {
    // Scores {P1:5, P2:10, P3:5} -> [{P2,10,1},{P1,5,2},{P3,5,2}]
    let ranked = rank_players(entries(&[(1, 5), (2, 10), (3, 5)]));

    let view: Vec<(i64, u32, u32)> = ranked.iter().map(|r| (r.player_id, r.score, r.rank)).collect();
    assert_eq!(view, vec![(2, 10, 1), (1, 5, 2), (3, 5, 2)]);
}

#[test]
fn ranking_gap_after_ties() {
    // 10,5,5,3 -> ranks 1,2,2,4: the score after a tie takes its position,
    // not previous-rank+1.
    let ranked = rank_players(entries(&[(1, 10), (2, 5), (3, 5), (4, 3)]));
    let ranks: Vec<u32> = ranked.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, vec![1, 2, 2, 4]);
}

#[test]
fn ranking_all_tied_is_all_rank_one() {
    let ranked = rank_players(entries(&[(1, 4), (2, 4), (3, 4)]));
    assert!(ranked.iter().all(|r| r.rank == 1));
    // Ties keep input (roster) order.
    let ids: Vec<i64> = ranked.iter().map(|r| r.player_id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn compute_rankings_applies_once_only() {
    let rules = test_rules();
    let mut state = make_game_state(
        3,
        MakeGameStateArgs {
            phase: Phase::Finished,
            ..MakeGameStateArgs::default()
        },
    );
    award_success(&mut state, &rules, 2);

    compute_rankings(&mut state);
    let first = state.rankings.clone().unwrap();
    assert_eq!(first[0].player_id, 2);
    assert_eq!(first[0].rank, 1);

    // A later score change must not alter the frozen standings.
    award_success(&mut state, &rules, 3);
    compute_rankings(&mut state);
    assert_eq!(state.rankings.as_ref().unwrap(), &first);
}

#[test]
fn rankings_carry_display_names() {
    let mut state = make_game_state(2, MakeGameStateArgs::default());
    compute_rankings(&mut state);
    let rankings = state.rankings.unwrap();
    assert_eq!(rankings[0].display_name, "player-1");
    assert_eq!(rankings[1].display_name, "player-2");
}
