//! Public snapshot API for observing game state without exposing internals.
//!
//! Snapshots are structural deep copies: every map, list, and string is
//! owned by the snapshot, so no caller mutation can reach engine state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::board::{MoveStep, Position};
use crate::domain::scoring::RankedPlayer;
use crate::domain::state::{GameState, Phase, PlayerId};

/// Countdown view for the active phase timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerView {
    /// Whole seconds left, rounded up.
    pub remaining_secs: u64,
    /// The phase's full time limit in seconds.
    pub limit_secs: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationPublic {
    pub moves: u8,
    pub seq: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPublic {
    pub id: PlayerId,
    pub display_name: String,
    pub score: u32,
    pub is_ready: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovePublic {
    pub player_id: PlayerId,
    pub path: Vec<MoveStep>,
    pub position: Position,
    pub goal_reached: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardsPublic {
    pub remaining: u32,
    pub total: u32,
}

/// Top-level snapshot published after every mutation and returned by
/// `state()`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: Phase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timer: Option<TimerView>,
    pub declarations: HashMap<PlayerId, DeclarationPublic>,
    pub declaration_order: Vec<PlayerId>,
    pub current_player: Option<PlayerId>,
    pub players: Vec<PlayerPublic>,
    pub cards: CardsPublic,
    pub move_history: Vec<MovePublic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rankings: Option<Vec<RankedPlayer>>,
}

/// Build a snapshot of the current game state.
///
/// The timer view is the orchestration layer's business (the domain holds no
/// clock), so it is passed in.
pub fn snapshot(state: &GameState, timer: Option<TimerView>) -> GameSnapshot {
    let declarations = state
        .declarations
        .iter()
        .map(|(&id, d)| {
            (
                id,
                DeclarationPublic {
                    moves: d.moves,
                    seq: d.seq,
                },
            )
        })
        .collect();

    let players = state
        .roster
        .iter()
        .map(|p| {
            let round_state = state.player_states.get(&p.id).cloned().unwrap_or_default();
            PlayerPublic {
                id: p.id,
                display_name: p.display_name.clone(),
                score: round_state.score,
                is_ready: round_state.is_ready,
            }
        })
        .collect();

    let move_history = state
        .round
        .move_history
        .iter()
        .map(|m| MovePublic {
            player_id: m.player_id,
            path: m.path.clone(),
            position: m.position,
            goal_reached: m.goal_reached,
        })
        .collect();

    GameSnapshot {
        phase: state.phase,
        timer,
        declarations,
        declaration_order: state.declaration_order.iter().copied().collect(),
        current_player: state.current_player,
        players,
        cards: CardsPublic {
            remaining: state.round.remaining_cards,
            total: state.round.total_cards,
        },
        move_history,
        rankings: state.rankings.clone(),
    }
}
