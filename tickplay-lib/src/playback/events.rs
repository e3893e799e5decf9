//! Playback events delivered to an optional observer.

use std::sync::Arc;

/// Why a worker left its loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    /// The position reached the track duration.
    Completed,
    /// `stop` was requested.
    Stopped,
}

/// Transport and progress notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEvent {
    Loaded { track: String, duration_secs: u64 },
    Started { track: String, position_secs: u64 },
    Progress { track: String, position_secs: u64 },
    Paused { position_secs: u64 },
    Resumed { position_secs: u64 },
    Finished {
        track: String,
        position_secs: u64,
        reason: FinishReason,
    },
    Stopped { position_secs: u64 },
}

/// Callback invoked for every [`PlaybackEvent`].
///
/// Progress and `Finished` events are delivered on the worker thread; the
/// rest on the thread that issued the command.
pub type EventObserver = Arc<dyn Fn(&PlaybackEvent) + Send + Sync>;

pub(crate) fn emit(observer: &Option<EventObserver>, event: PlaybackEvent) {
    if let Some(observer) = observer {
        observer(&event);
    }
}
