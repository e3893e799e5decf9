//! Per-tick delay used by the playback worker.

use std::time::Duration;

use super::clock::PlaybackClock;

/// Outcome of one tick delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    /// The delay elapsed; the worker should advance the clock.
    Elapsed,
    /// A stop was requested during the delay.
    Stopped,
}

/// Source of the delay between two clock advances.
///
/// Implementations must return [`Pace::Stopped`] promptly once
/// `clock.snapshot().stopped` becomes true, and must not hold the clock lock
/// across the whole delay.
pub trait Pacer: Send + Sync {
    fn pace(&self, clock: &PlaybackClock) -> Pace;
}

/// Wall-clock pacer: one tick per `interval`, cancellable by stop.
#[derive(Debug, Clone, Copy)]
pub struct IntervalPacer {
    interval: Duration,
}

impl IntervalPacer {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for IntervalPacer {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl Pacer for IntervalPacer {
    fn pace(&self, clock: &PlaybackClock) -> Pace {
        if clock.wait_for_tick(self.interval) {
            Pace::Elapsed
        } else {
            Pace::Stopped
        }
    }
}
