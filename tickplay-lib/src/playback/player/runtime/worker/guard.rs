//! Liveness guard for playback worker threads.

use std::sync::Arc;

use crate::playback::clock::{ClockSnapshot, PlaybackClock};

/// Guard that marks the worker `Finished` when the loop exits, including by
/// unwinding.
pub(super) struct PlaybackThreadGuard {
    clock: Option<Arc<PlaybackClock>>,
}

impl PlaybackThreadGuard {
    pub(super) fn new(clock: Arc<PlaybackClock>) -> Self {
        Self { clock: Some(clock) }
    }

    /// Publish termination now and return the final clock state.
    pub(super) fn finish(mut self) -> Option<ClockSnapshot> {
        self.clock.take().map(|clock| clock.finish())
    }
}

impl Drop for PlaybackThreadGuard {
    fn drop(&mut self) {
        if let Some(clock) = self.clock.take() {
            clock.finish();
        }
    }
}
