//! Success scoring and end-of-game competition ranking.

use serde::{Deserialize, Serialize};

use crate::domain::rules::GameRules;
use crate::domain::state::{GameState, PlayerId};

/// Final standing for one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedPlayer {
    pub player_id: PlayerId,
    pub display_name: String,
    pub score: u32,
    pub rank: u32,
}

/// Award the success points for solving the current target.
///
/// The only way a score ever changes; failures never subtract (the rules
/// retain `penalty_points` unused).
pub fn award_success(state: &mut GameState, rules: &GameRules, who: PlayerId) {
    if let Some(player_state) = state.player_states.get_mut(&who) {
        player_state.score += rules.success_points;
    }
}

/// Compute final standings. Applies once; subsequent calls are no-ops.
pub fn compute_rankings(state: &mut GameState) {
    if state.rankings.is_some() {
        return;
    }

    let entries: Vec<(PlayerId, String, u32)> = state
        .roster
        .iter()
        .map(|p| {
            let score = state
                .player_states
                .get(&p.id)
                .map(|s| s.score)
                .unwrap_or(0);
            (p.id, p.display_name.clone(), score)
        })
        .collect();

    state.rankings = Some(rank_players(entries));
}

/// Competition ranking with gap: tied scores share a rank, and the next
/// distinct score's rank equals its 1-based position in the sorted list.
/// Ties keep the input (roster) order.
pub fn rank_players(mut entries: Vec<(PlayerId, String, u32)>) -> Vec<RankedPlayer> {
    entries.sort_by(|a, b| b.2.cmp(&a.2));

    let mut rankings: Vec<RankedPlayer> = Vec::with_capacity(entries.len());
    for (idx, (player_id, display_name, score)) in entries.into_iter().enumerate() {
        let rank = match rankings.last() {
            Some(prev) if prev.score == score => prev.rank,
            _ => idx as u32 + 1,
        };
        rankings.push(RankedPlayer {
            player_id,
            display_name,
            score,
            rank,
        });
    }
    rankings
}
