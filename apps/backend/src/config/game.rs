//! Environment-driven construction of [`GameRules`].
//!
//! Every knob falls back to the compiled default when the variable is unset
//! or unparsable; a bad value is logged and ignored rather than failing
//! startup.

use std::time::Duration;

use tracing::warn;

use crate::domain::rules::GameRules;

/// Build rules from `GAME_*` environment overrides.
///
/// Recognized variables: `GAME_MAX_PLAYERS`, `GAME_DECLARATION_SECS`,
/// `GAME_SOLUTION_SECS`, `GAME_MIN_MOVES`, `GAME_MAX_MOVES`,
/// `GAME_SUCCESS_POINTS`, `GAME_PENALTY_POINTS`. The result is not yet
/// validated; engine construction validates.
pub fn rules_from_env() -> GameRules {
    let defaults = GameRules::default();
    GameRules {
        max_players: read_parsed("GAME_MAX_PLAYERS", defaults.max_players),
        declaration_time_limit: Duration::from_secs(read_parsed(
            "GAME_DECLARATION_SECS",
            defaults.declaration_time_limit.as_secs(),
        )),
        solution_time_limit: Duration::from_secs(read_parsed(
            "GAME_SOLUTION_SECS",
            defaults.solution_time_limit.as_secs(),
        )),
        min_moves: read_parsed("GAME_MIN_MOVES", defaults.min_moves),
        max_moves: read_parsed("GAME_MAX_MOVES", defaults.max_moves),
        success_points: read_parsed("GAME_SUCCESS_POINTS", defaults.success_points),
        penalty_points: read_parsed("GAME_PENALTY_POINTS", defaults.penalty_points),
    }
}

fn read_parsed<T: std::str::FromStr + Copy>(key: &str, fallback: T) -> T {
    match std::env::var(key) {
        Ok(raw) => match raw.parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                warn!(key, raw = %raw, "Ignoring unparsable game rule override");
                fallback
            }
        },
        Err(_) => fallback,
    }
}
