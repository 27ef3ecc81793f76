#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod board;
pub mod cards;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod infra;
pub mod realtime;
pub mod services;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use board::{Direction, MoveOutcome, MoveStep, MoveValidator, NullValidator, Position};
pub use cards::{CardSource, RoundToken, TokenDeck};
pub use config::rules_from_env;
pub use domain::rules::GameRules;
pub use domain::snapshot::GameSnapshot;
pub use domain::state::{Phase, PlayerId, PlayerProfile};
pub use error::GameError;
pub use errors::DomainError;
pub use services::game_flow::GameFlowService;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
