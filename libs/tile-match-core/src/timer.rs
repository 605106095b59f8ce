//! Round timer and best-time bookkeeping.

use crate::clock::{Clock, Wakeup, WakeupKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Best completion time in seconds per subject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BestTimes(BTreeMap<String, u64>);

impl BestTimes {
    pub fn get(&self, subject: &str) -> Option<u64> {
        self.0.get(subject).copied()
    }

    /// Store `elapsed` if the subject has no time yet or it beats the old one.
    pub fn record_if_best(&mut self, subject: &str, elapsed: u64) -> bool {
        match self.0.get(subject) {
            Some(&prior) if elapsed >= prior => false,
            _ => {
                self.0.insert(subject.to_string(), elapsed);
                true
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Elapsed-seconds counter driven by clock ticks.
///
/// Each start bumps the epoch, and ticks scheduled under an older epoch are
/// dropped. Restarting therefore never leaves two tick chains running.
#[derive(Debug, Default)]
pub struct TimerService {
    elapsed_secs: u64,
    running: bool,
    epoch: u64,
}

impl TimerService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Halt and zero the timer, then schedule the end of the preview window.
    pub fn start_preview<C: Clock>(&mut self, clock: &mut C, round: u64, preview: Duration) {
        self.halt();
        self.elapsed_secs = 0;
        clock.after(
            preview,
            Wakeup {
                kind: WakeupKind::PreviewOver,
                round,
                epoch: self.epoch,
            },
        );
    }

    /// Start counting from zero, cancelling any earlier tick chain.
    pub fn start<C: Clock>(&mut self, clock: &mut C, round: u64, tick: Duration) {
        self.halt();
        self.elapsed_secs = 0;
        self.running = true;
        self.schedule_tick(clock, round, tick);
    }

    /// Handle a tick. Returns whether the tick was current and counted.
    pub fn on_tick<C: Clock>(&mut self, clock: &mut C, wakeup: Wakeup, tick: Duration) -> bool {
        if !self.running || wakeup.epoch != self.epoch {
            return false;
        }
        self.elapsed_secs += 1;
        self.schedule_tick(clock, wakeup.round, tick);
        true
    }

    /// Stop ticking and return the elapsed seconds.
    pub fn stop(&mut self) -> u64 {
        self.halt();
        self.elapsed_secs
    }

    fn halt(&mut self) {
        self.running = false;
        self.epoch += 1;
    }

    fn schedule_tick<C: Clock>(&self, clock: &mut C, round: u64, tick: Duration) {
        clock.after(
            tick,
            Wakeup {
                kind: WakeupKind::Tick,
                round,
                epoch: self.epoch,
            },
        );
    }
}
