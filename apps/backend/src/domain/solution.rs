//! Solution-phase sequencing: turn enforcement, move budget, hand-off.

use crate::domain::state::{require_current_player, GameState, MoveRecord, Phase, PlayerId};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

/// Who attempts next after the current solver fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverHandoff {
    Next(PlayerId),
    /// Nobody left in the declaration order; the round is over.
    Exhausted,
}

/// Validate a move attempt without mutating anything.
///
/// Checks, in order: phase, turn ownership, recorded declaration (defensive;
/// the state machine only ever promotes declarers), and the per-call move
/// budget. Budget exhaustion without reaching the goal is not checked here:
/// the timer is the sole failure trigger.
pub fn validate_move(
    state: &GameState,
    who: PlayerId,
    path_len: usize,
) -> Result<(), DomainError> {
    if state.phase != Phase::Solution {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Not in solution phase",
        ));
    }

    let current = require_current_player(state, "validate_move")?;
    if current != who {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            format!("It is player {current}'s turn"),
        ));
    }

    let declaration = state.declarations.get(&who).ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Declaration,
            format!("Player {who} has no declaration for this round"),
        )
    })?;

    if path_len > declaration.moves as usize {
        return Err(DomainError::validation(
            ValidationKind::TooManyMoves,
            format!(
                "Path of {path_len} moves exceeds declared budget of {}",
                declaration.moves
            ),
        ));
    }

    Ok(())
}

pub fn record_move(state: &mut GameState, record: MoveRecord) {
    state.round.move_history.push(record);
}

/// Drop the current solver from the order and promote the next declarer.
pub fn fail_current_solver(state: &mut GameState) -> SolverHandoff {
    state.declaration_order.pop_front();
    match state.declaration_order.front().copied() {
        Some(next) => {
            state.current_player = Some(next);
            SolverHandoff::Next(next)
        }
        None => SolverHandoff::Exhausted,
    }
}
