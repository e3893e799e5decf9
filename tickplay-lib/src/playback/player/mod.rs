//! High-level playback controller for the tickplay library.

mod controls;
mod runtime;
mod settings;

pub use settings::PlayerSettings;

use std::sync::Arc;
use std::thread::JoinHandle;

use crate::playback::clock::{PlaybackClock, WorkerState};
use crate::playback::events::EventObserver;
use crate::playback::pacer::{IntervalPacer, Pacer};
use crate::track::Track;

/// High-level playback state for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    /// No track loaded.
    Init,
    /// A track is loaded and no session has run since.
    Ready,
    Playing,
    Paused,
    /// The last session was stopped before the end of the track.
    Stopped,
    /// The last session reached the end of the track.
    Finished,
}

/// Primary playback controller.
///
/// `Player` owns the loaded track, the shared [`PlaybackClock`] and at most
/// one worker thread. Every command is issued from the owning thread; only
/// [`Player::stop`] blocks, until the worker has exited.
pub struct Player {
    track: Option<Track>,
    clock: Arc<PlaybackClock>,
    settings: PlayerSettings,
    pacer: Arc<dyn Pacer>,
    observer: Option<EventObserver>,
    playback_thread_handle: Option<JoinHandle<()>>,
}

impl Player {
    /// Create a player that ticks every `settings.tick_ms` milliseconds.
    pub fn new(settings: PlayerSettings) -> Self {
        let pacer = Arc::new(IntervalPacer::new(settings.tick_interval()));
        Self::with_pacer(settings, pacer)
    }

    /// Create a player whose tick delay comes from a custom [`Pacer`].
    ///
    /// `settings.tick_ms` is ignored until [`Player::set_tick_ms`] replaces the
    /// pacer.
    pub fn with_pacer(settings: PlayerSettings, pacer: Arc<dyn Pacer>) -> Self {
        Self {
            track: None,
            clock: Arc::new(PlaybackClock::new()),
            settings,
            pacer,
            observer: None,
            playback_thread_handle: None,
        }
    }

    /// Register a callback for playback events, replacing any previous one.
    ///
    /// The observer is captured by the next session; a running worker keeps
    /// the observer it started with.
    pub fn set_observer(&mut self, observer: EventObserver) {
        self.observer = Some(observer);
    }

    /// The currently loaded track.
    pub fn track(&self) -> Option<&Track> {
        self.track.as_ref()
    }

    /// Shared clock, for callers that want to watch state directly.
    pub fn clock(&self) -> Arc<PlaybackClock> {
        self.clock.clone()
    }

    /// Return true while a worker thread exists and has not finished its loop.
    pub(super) fn session_alive(&self) -> bool {
        self.playback_thread_handle.is_some() && self.clock.worker_state() != WorkerState::Finished
    }

    /// Derive the high-level state from the clock and worker handle.
    pub fn state(&self) -> PlayerState {
        let Some(track) = self.track.as_ref() else {
            return PlayerState::Init;
        };

        let snapshot = self.clock.snapshot();
        if self.session_alive() {
            return if snapshot.playing {
                PlayerState::Playing
            } else {
                PlayerState::Paused
            };
        }

        match snapshot.worker {
            WorkerState::Finished if snapshot.position_secs >= track.duration_secs() => {
                PlayerState::Finished
            }
            WorkerState::Finished => PlayerState::Stopped,
            _ => PlayerState::Ready,
        }
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        if self.playback_thread_handle.is_some() {
            self.clock.request_stop();
            self.join_playback_thread();
        }
    }
}
