//! Game flow orchestration service - bridges pure domain logic with the
//! phase timer and snapshot broadcast.
//!
//! One `GameFlowService` is one game instance. Public operations
//! (`start_game`, `declare_moves`, `move_robot`) and the timer callback all
//! serialize on the instance lock and run to completion without
//! interleaving; every mutation ends with a snapshot publish.

mod orchestration;
mod player_actions;
mod round_lifecycle;


use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::broadcast;
use tracing::info;

use crate::board::MoveValidator;
use crate::cards::CardSource;
use crate::domain::rules::GameRules;
use crate::domain::snapshot::GameSnapshot;
use crate::domain::state::GameState;
use crate::error::GameError;
use crate::infra::timer::PhaseTimer;
use crate::realtime::SnapshotHub;

/// Authoritative engine for one game instance.
///
/// Cheap to clone; clones address the same instance. Construction and all
/// operations must happen inside a tokio runtime context (the phase timer
/// is a spawned task).
#[derive(Clone)]
pub struct GameFlowService {
    shared: Arc<Shared>,
}

pub(crate) struct Shared {
    pub(crate) rules: GameRules,
    pub(crate) hub: SnapshotHub,
    pub(crate) inner: Mutex<Inner>,
}

pub(crate) struct Inner {
    pub(crate) game: GameState,
    pub(crate) timer: PhaseTimer,
    pub(crate) cards: Box<dyn CardSource>,
    pub(crate) validator: Box<dyn MoveValidator>,
    pub(crate) terminated: bool,
}

impl GameFlowService {
    pub fn new(
        rules: GameRules,
        cards: Box<dyn CardSource>,
        validator: Box<dyn MoveValidator>,
    ) -> Result<Self, GameError> {
        rules.validate().map_err(|err| GameError::Config {
            detail: err.to_string(),
        })?;

        let mut game = GameState::new();
        game.round.remaining_cards = cards.remaining();
        game.round.total_cards = cards.total();

        Ok(Self {
            shared: Arc::new(Shared {
                rules,
                hub: SnapshotHub::new(),
                inner: Mutex::new(Inner {
                    game,
                    timer: PhaseTimer::new(),
                    cards,
                    validator,
                    terminated: false,
                }),
            }),
        })
    }

    pub(crate) fn from_shared(shared: Arc<Shared>) -> Self {
        Self { shared }
    }

    /// Attach to the snapshot stream published after every mutation.
    pub fn subscribe(&self) -> broadcast::Receiver<GameSnapshot> {
        self.shared.hub.subscribe()
    }

    /// Deep-copied view of the current state; same shape as the published
    /// snapshots.
    pub fn state(&self) -> GameSnapshot {
        let inner = self.shared.inner.lock();
        self.snapshot_of(&inner)
    }

    /// Cancel timers and retire the instance. Idempotent; `state()` keeps
    /// working, mutating operations fail with [`GameError::Terminated`].
    pub fn shutdown(&self) {
        let mut inner = self.shared.inner.lock();
        if inner.terminated {
            return;
        }
        inner.terminated = true;
        inner.timer.cancel();
        info!("Game instance shut down");
    }

    pub(crate) fn ensure_live(&self, inner: &Inner) -> Result<(), GameError> {
        if inner.terminated {
            Err(GameError::Terminated)
        } else {
            Ok(())
        }
    }
}
