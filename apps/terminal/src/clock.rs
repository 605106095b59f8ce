//! Real-time clock backed by tokio timers.

use std::time::Duration;
use tile_match_core::{Clock, Wakeup};
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::Instant;

/// Delivers wakeups through a channel once their delay has elapsed. The game
/// loop feeds whatever arrives back into the engine.
pub struct TokioClock {
    started: Instant,
    tx: UnboundedSender<Wakeup>,
}

impl TokioClock {
    pub fn new(tx: UnboundedSender<Wakeup>) -> Self {
        Self {
            started: Instant::now(),
            tx,
        }
    }
}

impl Clock for TokioClock {
    fn now(&self) -> Duration {
        self.started.elapsed()
    }

    fn after(&mut self, delay: Duration, wakeup: Wakeup) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver is gone once the game loop exits.
            let _ = tx.send(wakeup);
        });
    }
}
