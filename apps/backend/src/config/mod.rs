//! Configuration loading.

pub mod game;

pub use game::rules_from_env;
