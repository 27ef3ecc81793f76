use std::collections::{HashMap, VecDeque};

use serde::{Deserialize, Serialize};

use crate::board::{MoveStep, Position};
use crate::cards::RoundToken;
use crate::domain::scoring::RankedPlayer;
use crate::errors::domain::DomainError;

pub type PlayerId = i64;

/// Overall game progression phases.
///
/// Declaration and Solution alternate once per remaining card; Finished is
/// terminal.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Game created but not yet started.
    Waiting,
    /// Players privately commit a move count for the current target.
    Declaration,
    /// Declarers attempt the target in declaration order.
    Solution,
    /// All cards consumed; rankings computed.
    Finished,
}

/// Roster entry. The player itself is an external entity; the engine stores
/// only the opaque id and the display name it was handed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerProfile {
    pub id: PlayerId,
    pub display_name: String,
}

/// Per-player state owned by the engine for the lifetime of the instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerRoundState {
    /// Cumulative across rounds, monotonically non-decreasing.
    pub score: u32,
    /// Reserved for lobby-driven ready flows; never set by the engine.
    pub is_ready: bool,
}

/// A player's committed move count for the current round.
///
/// Immutable after creation; re-declaring replaces the whole entry. `seq` is
/// the per-game monotonic creation order and breaks ties between equal
/// declared counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration {
    pub player_id: PlayerId,
    pub moves: u8,
    pub seq: u64,
}

/// One move attempt recorded during a solution phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub player_id: PlayerId,
    pub path: Vec<MoveStep>,
    pub position: Position,
    pub goal_reached: bool,
}

/// Per-round container tracking the card source mirror and the current
/// solution attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundContext {
    /// Mirror of the card source's decrement-only count.
    pub remaining_cards: u32,
    pub total_cards: u32,
    /// Opaque token for the current target; absent before start and after
    /// exhaustion.
    pub current_token: Option<RoundToken>,
    /// Move attempts of the current solver; cleared each time a new solver
    /// begins.
    pub move_history: Vec<MoveRecord>,
}

impl RoundContext {
    pub fn empty() -> Self {
        Self {
            remaining_cards: 0,
            total_cards: 0,
            current_token: None,
            move_history: Vec::new(),
        }
    }
}

/// Entire game container, sufficient for pure domain operations.
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: Phase,
    /// Stable roster order; ranking ties resolve in this order.
    pub roster: Vec<PlayerProfile>,
    pub player_states: HashMap<PlayerId, PlayerRoundState>,
    /// One declaration per player, cleared every Declaration phase.
    pub declarations: HashMap<PlayerId, Declaration>,
    /// Turn sequence for the solution phase, consumed front-to-back.
    pub declaration_order: VecDeque<PlayerId>,
    /// Player whose turn it is to attempt the target. Random placeholder
    /// between `start_game` and the first order computation.
    pub current_player: Option<PlayerId>,
    /// Monotonic counter behind `Declaration::seq`.
    pub declaration_seq: u64,
    pub round: RoundContext,
    /// Populated exactly once, at Finished.
    pub rankings: Option<Vec<RankedPlayer>>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Waiting,
            roster: Vec::new(),
            player_states: HashMap::new(),
            declarations: HashMap::new(),
            declaration_order: VecDeque::new(),
            current_player: None,
            declaration_seq: 0,
            round: RoundContext::empty(),
            rankings: None,
        }
    }

    pub fn next_declaration_seq(&mut self) -> u64 {
        self.declaration_seq += 1;
        self.declaration_seq
    }

    pub fn is_on_roster(&self, player_id: PlayerId) -> bool {
        self.roster.iter().any(|p| p.id == player_id)
    }

    pub fn display_name(&self, player_id: PlayerId) -> Option<&str> {
        self.roster
            .iter()
            .find(|p| p.id == player_id)
            .map(|p| p.display_name.as_str())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn require_current_player(state: &GameState, ctx: &'static str) -> Result<PlayerId, DomainError> {
    state.current_player.ok_or_else(|| {
        DomainError::validation_other(format!(
            "Invariant violated: current_player must be set ({ctx})"
        ))
    })
}
