//! Snapshot fan-out to the transport layer.

use tokio::sync::broadcast;
use tracing::trace;

use crate::domain::snapshot::GameSnapshot;

/// Buffered snapshots per subscriber. Slow consumers observe a lag error and
/// resynchronize from `state()`; the engine never blocks on them.
const CHANNEL_CAPACITY: usize = 256;

/// In-process broadcast hub carrying owned snapshots.
///
/// One hub per game instance. Subscribers attach before or after
/// `start_game`; a publish with no subscribers is a no-op.
pub struct SnapshotHub {
    tx: broadcast::Sender<GameSnapshot>,
}

impl SnapshotHub {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<GameSnapshot> {
        self.tx.subscribe()
    }

    pub fn publish(&self, snapshot: GameSnapshot) {
        match self.tx.send(snapshot) {
            Ok(receivers) => trace!(receivers, "Snapshot published"),
            Err(_) => trace!("Snapshot published with no subscribers"),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for SnapshotHub {
    fn default() -> Self {
        Self::new()
    }
}
