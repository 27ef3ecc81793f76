//! Move validation contract.
//!
//! Board geometry, wall/reflector path computation, and target matching all
//! live behind [`MoveValidator`]. The engine submits a candidate path and
//! consumes only the resulting position and the "goal reached" signal.

use serde::{Deserialize, Serialize};

use crate::cards::RoundToken;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// One robot move in a candidate path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveStep {
    pub robot: u8,
    pub direction: Direction,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

/// Result of evaluating a candidate path against the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Where the moved robot came to rest.
    pub position: Position,
    /// Whether the robot reached the current round's target.
    pub goal_reached: bool,
}

/// Board/target collaborator.
///
/// Implementations own the board and robot positions and are called
/// synchronously inside `move_robot`; they must not block. The validator may
/// keep state across calls within one solution attempt (robots stay where
/// the previous call left them).
pub trait MoveValidator: Send {
    fn evaluate(&mut self, token: Option<&RoundToken>, path: &[MoveStep]) -> MoveOutcome;
}

/// Placeholder validator: never reaches the goal.
///
/// Stands in until a real geometry collaborator is wired; the matching rule
/// belongs to that collaborator, not to the engine.
#[derive(Default)]
pub struct NullValidator;

impl MoveValidator for NullValidator {
    fn evaluate(&mut self, _token: Option<&RoundToken>, _path: &[MoveStep]) -> MoveOutcome {
        MoveOutcome {
            position: Position::default(),
            goal_reached: false,
        }
    }
}
