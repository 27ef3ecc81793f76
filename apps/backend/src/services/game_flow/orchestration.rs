//! Timer scheduling and the phase-timeout callback.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use super::{GameFlowService, Inner, Shared};
use crate::domain::snapshot::{snapshot, GameSnapshot};
use crate::domain::state::Phase;
use crate::infra::timer::ceil_secs;

impl GameFlowService {
    pub(super) fn snapshot_of(&self, inner: &Inner) -> GameSnapshot {
        snapshot(&inner.game, inner.timer.view(Instant::now()))
    }

    /// Publish the fully-applied state. Always the last step of a mutation.
    pub(super) fn publish(&self, inner: &Inner) {
        self.shared.hub.publish(self.snapshot_of(inner));
    }

    /// Arm the phase timer and spawn its callback task. The previous
    /// schedule is cancelled first; at most one is ever outstanding.
    pub(super) fn start_phase_timer(&self, inner: &mut Inner, limit: Duration) {
        let (epoch, token, deadline) = inner.timer.arm(limit);
        let shared = Arc::clone(&self.shared);
        let handle = tokio::spawn(run_phase_timer(shared, epoch, deadline, token));
        inner.timer.attach(handle);
    }

    /// Runs with the lock held, from the timer task, after the epoch check
    /// passed.
    fn handle_phase_timeout(&self, inner: &mut Inner) {
        match inner.game.phase {
            Phase::Declaration => self.end_declaration_phase(inner),
            Phase::Solution => self.fail_current_solver(inner),
            // Unreachable under the cancel-before-transition discipline.
            Phase::Waiting | Phase::Finished => {
                warn!(phase = ?inner.game.phase, "Timer fired outside a timed phase");
            }
        }
    }
}

/// Callback task: publishes a countdown snapshot whenever the rounded
/// remaining seconds change, then fires the phase timeout at the deadline.
///
/// Remaining time is always recomputed from the deadline, never decremented
/// by ticks, so scheduling drift cannot accumulate.
async fn run_phase_timer(
    shared: Arc<Shared>,
    epoch: u64,
    deadline: Instant,
    token: CancellationToken,
) {
    let service = GameFlowService::from_shared(shared);
    let mut last_published: Option<u64> = None;

    loop {
        let now = Instant::now();
        if now >= deadline {
            break;
        }
        let secs = ceil_secs(deadline - now);
        // The rounded value next changes at the whole-second boundary below
        // it; waking exactly there avoids redundant publishes.
        let wake = deadline - Duration::from_secs(secs.saturating_sub(1));
        tokio::select! {
            _ = token.cancelled() => return,
            _ = tokio::time::sleep_until(wake) => {}
        }
        if Instant::now() >= deadline {
            break;
        }

        let inner = service.shared.inner.lock();
        if inner.timer.epoch() != epoch {
            return;
        }
        let remaining = inner.timer.view(Instant::now()).map(|v| v.remaining_secs);
        if remaining != last_published {
            last_published = remaining;
            service.publish(&inner);
        }
    }

    let mut inner = service.shared.inner.lock();
    if inner.timer.epoch() != epoch {
        return;
    }
    service.handle_phase_timeout(&mut inner);
}
