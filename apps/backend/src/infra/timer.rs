//! Single cancellable phase timer.
//!
//! At most one scheduled callback task is outstanding per game instance.
//! Arming cancels the previous schedule first; a task that raced past its
//! cancellation must re-check the epoch under the instance lock before
//! touching state, so a stale callback can never mutate a transitioned
//! phase.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::domain::snapshot::TimerView;

pub struct PhaseTimer {
    epoch: u64,
    started_at: Option<Instant>,
    limit: Option<Duration>,
    cancel: Option<CancellationToken>,
    handle: Option<JoinHandle<()>>,
}

impl PhaseTimer {
    pub fn new() -> Self {
        Self {
            epoch: 0,
            started_at: None,
            limit: None,
            cancel: None,
            handle: None,
        }
    }

    /// Cancel any pending schedule. Idempotent.
    ///
    /// Bumps the epoch so an already-woken task sees itself stale.
    pub fn cancel(&mut self) {
        self.epoch += 1;
        if let Some(token) = self.cancel.take() {
            token.cancel();
        }
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
        self.started_at = None;
        self.limit = None;
    }

    /// Start timing a new phase. Cancels the previous schedule first and
    /// returns what the callback task needs: its epoch, its cancellation
    /// token, and the deadline.
    pub fn arm(&mut self, limit: Duration) -> (u64, CancellationToken, Instant) {
        self.cancel();
        let token = CancellationToken::new();
        let now = Instant::now();
        self.started_at = Some(now);
        self.limit = Some(limit);
        self.cancel = Some(token.clone());
        (self.epoch, token, now + limit)
    }

    /// Attach the spawned callback task so cancellation can abort it.
    pub fn attach(&mut self, handle: JoinHandle<()>) {
        self.handle = Some(handle);
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn elapsed(&self, now: Instant) -> Option<Duration> {
        self.started_at.map(|s| now.saturating_duration_since(s))
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let started = self.started_at?;
        let limit = self.limit?;
        Some((started + limit).saturating_duration_since(now))
    }

    /// Countdown view for snapshots, or `None` when no timer is armed.
    pub fn view(&self, now: Instant) -> Option<TimerView> {
        let remaining = self.remaining(now)?;
        let limit = self.limit?;
        Some(TimerView {
            remaining_secs: ceil_secs(remaining),
            limit_secs: limit.as_secs(),
        })
    }
}

impl Default for PhaseTimer {
    fn default() -> Self {
        Self::new()
    }
}

/// Whole seconds, rounded up.
pub fn ceil_secs(d: Duration) -> u64 {
    d.as_secs() + u64::from(d.subsec_nanos() > 0)
}
