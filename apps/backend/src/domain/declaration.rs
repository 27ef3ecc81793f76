//! Declaration collection and turn-order computation.

use crate::domain::rules::GameRules;
use crate::domain::state::{Declaration, GameState, Phase, PlayerId};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

/// Record or replace a player's declaration for the current round.
///
/// Re-declaring keeps last-value-wins semantics but takes a fresh sequence
/// number, which moves the player behind earlier declarers on ties.
pub fn record_declaration(
    state: &mut GameState,
    rules: &GameRules,
    who: PlayerId,
    moves: u8,
) -> Result<(), DomainError> {
    if state.phase != Phase::Declaration {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Not in declaration phase",
        ));
    }

    if !state.is_on_roster(who) {
        return Err(DomainError::not_found(
            NotFoundKind::Player,
            format!("Player {who} is not in this game"),
        ));
    }

    let range = rules.declaration_range();
    if !range.contains(&moves) {
        return Err(DomainError::validation(
            ValidationKind::OutOfRange,
            format!("Declared moves must be in range {range:?}"),
        ));
    }

    let seq = state.next_declaration_seq();
    state.declarations.insert(
        who,
        Declaration {
            player_id: who,
            moves,
            seq,
        },
    );
    Ok(())
}

/// Turn order for the collected declarations: fewest declared moves first,
/// ties broken by declaration sequence (earliest commitment wins).
pub fn declaration_order(state: &GameState) -> Vec<PlayerId> {
    let mut entries: Vec<&Declaration> = state.declarations.values().collect();
    entries.sort_by_key(|d| (d.moves, d.seq));
    entries.iter().map(|d| d.player_id).collect()
}

/// Freeze the declaration phase: compute the order and promote its head to
/// current player. Returns the head, or `None` when nobody declared.
pub fn close_declarations(state: &mut GameState) -> Option<PlayerId> {
    state.declaration_order = declaration_order(state).into();
    let head = state.declaration_order.front().copied();
    if let Some(player) = head {
        state.current_player = Some(player);
    }
    head
}
