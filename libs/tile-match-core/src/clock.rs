//! Time source and deferred callbacks.
//!
//! The engine never sleeps. It asks its clock to deliver a [`Wakeup`] after a
//! delay and receives it later through [`crate::engine::Event::Wakeup`]. Every
//! wakeup carries the generation it was scheduled in, so callbacks from an
//! abandoned round or a restarted timer can be recognised and dropped.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What a deferred callback should do when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WakeupKind {
    PreviewOver,
    HideMismatch,
    Tick,
}

/// A deferred callback tagged with the round and timer epoch it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wakeup {
    pub kind: WakeupKind,
    pub round: u64,
    pub epoch: u64,
}

/// Source of time for the engine.
pub trait Clock {
    /// Time elapsed since the clock was created.
    fn now(&self) -> Duration;

    /// Deliver `wakeup` back to the engine once `delay` has passed.
    fn after(&mut self, delay: Duration, wakeup: Wakeup);
}

/// Deterministic clock for tests and simulations. Time only moves when the
/// owner advances it.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Duration,
    seq: u64,
    pending: Vec<(Duration, u64, Wakeup)>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of callbacks not yet delivered.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Pop the earliest callback due at or before `deadline`, moving the clock
    /// to its due time. Ties fire in scheduling order.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<Wakeup> {
        let (idx, _) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, (due, _, _))| *due <= deadline)
            .min_by_key(|(_, (due, seq, _))| (*due, *seq))?;

        let (due, _, wakeup) = self.pending.swap_remove(idx);
        self.now = self.now.max(due);
        Some(wakeup)
    }

    /// Move the clock forward without delivering anything.
    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now
    }

    fn after(&mut self, delay: Duration, wakeup: Wakeup) {
        self.seq += 1;
        self.pending.push((self.now + delay, self.seq, wakeup));
    }
}
