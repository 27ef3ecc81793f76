//! Domain layer: pure game logic types and helpers.

pub mod declaration;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod solution;
pub mod state;


#[cfg(test)]
mod tests_props_ranking;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use declaration::{close_declarations, declaration_order, record_declaration};
pub use rules::{GameRules, MIN_PLAYERS};
pub use scoring::{award_success, compute_rankings, rank_players, RankedPlayer};
pub use snapshot::{snapshot, GameSnapshot, TimerView};
pub use solution::{fail_current_solver, record_move, validate_move, SolverHandoff};
pub use state::{GameState, Phase, PlayerId, PlayerProfile};
