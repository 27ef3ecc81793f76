use std::collections::HashSet;

use rand::Rng;
use tracing::{debug, info};

use super::GameFlowService;
use crate::board::MoveStep;
use crate::domain::rules::MIN_PLAYERS;
use crate::domain::state::{MoveRecord, Phase, PlayerId, PlayerProfile, PlayerRoundState};
use crate::domain::{declaration, scoring, solution};
use crate::error::GameError;
use crate::errors::domain::{DomainError, ValidationKind};

impl GameFlowService {
    /// Start the game with the supplied roster and enter the first
    /// declaration phase.
    ///
    /// The initial current player is uniformly random and is only a
    /// placeholder until the first declaration order is computed.
    pub fn start_game(&self, players: Vec<PlayerProfile>) -> Result<(), GameError> {
        let mut inner = self.shared.inner.lock();
        self.ensure_live(&inner)?;
        let inner = &mut *inner;

        if inner.game.phase != Phase::Waiting {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "Game already started",
            )
            .into());
        }
        if players.len() < MIN_PLAYERS {
            return Err(DomainError::validation(
                ValidationKind::InsufficientPlayers,
                format!("Need at least {MIN_PLAYERS} players, got {}", players.len()),
            )
            .into());
        }
        if players.len() > self.shared.rules.max_players {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayerCount,
                format!(
                    "Roster of {} exceeds the maximum of {}",
                    players.len(),
                    self.shared.rules.max_players
                ),
            )
            .into());
        }
        let mut seen = HashSet::new();
        if players.iter().any(|p| !seen.insert(p.id)) {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayerCount,
                "Roster contains duplicate player ids",
            )
            .into());
        }

        inner.game.player_states = players
            .iter()
            .map(|p| (p.id, PlayerRoundState::default()))
            .collect();
        let initial = rand::rng().random_range(0..players.len());
        inner.game.current_player = Some(players[initial].id);
        inner.game.roster = players;

        info!(players = inner.game.roster.len(), "Game started");
        self.advance_round(inner);
        Ok(())
    }

    /// Record (or replace) a player's declaration for the current target.
    pub fn declare_moves(&self, player_id: PlayerId, moves: u8) -> Result<(), GameError> {
        let mut inner = self.shared.inner.lock();
        self.ensure_live(&inner)?;
        let inner = &mut *inner;

        declaration::record_declaration(&mut inner.game, &self.shared.rules, player_id, moves)?;
        debug!(player_id, moves, "Declaration recorded");
        self.publish(inner);
        Ok(())
    }

    /// Apply a move attempt for the current solver.
    ///
    /// A path that stays under the goal keeps the turn; only the timer fails
    /// a solver. Reaching the goal awards the success points and advances to
    /// the next target.
    pub fn move_robot(&self, player_id: PlayerId, path: Vec<MoveStep>) -> Result<(), GameError> {
        let mut inner = self.shared.inner.lock();
        self.ensure_live(&inner)?;
        let inner = &mut *inner;

        solution::validate_move(&inner.game, player_id, path.len())?;

        let outcome = inner
            .validator
            .evaluate(inner.game.round.current_token.as_ref(), &path);
        solution::record_move(
            &mut inner.game,
            MoveRecord {
                player_id,
                path,
                position: outcome.position,
                goal_reached: outcome.goal_reached,
            },
        );
        debug!(player_id, goal_reached = outcome.goal_reached, "Move applied");
        self.publish(inner);

        if outcome.goal_reached {
            inner.timer.cancel();
            scoring::award_success(&mut inner.game, &self.shared.rules, player_id);
            info!(player_id, "Target solved");
            self.advance_round(inner);
        }
        Ok(())
    }
}
