//! Worker-thread bootstrap and teardown for `Player`.

use std::thread;

use log::warn;

use crate::error::PlaybackError;
use crate::track::Track;

use super::super::Player;
use super::worker::{run_playback_thread, ThreadContext};

impl Player {
    /// Arm the clock and spawn a worker bound to `track`.
    ///
    /// The caller guarantees no other worker is alive.
    pub(in crate::playback::player) fn initialize_thread(
        &mut self,
        track: Track,
    ) -> Result<(), PlaybackError> {
        self.clock.begin_session();

        let context = ThreadContext {
            clock: self.clock.clone(),
            track,
            pacer: self.pacer.clone(),
            observer: self.observer.clone(),
            log_path: self.settings.log_path.clone(),
        };

        let spawned = thread::Builder::new()
            .name("tickplay-worker".to_string())
            .spawn(move || run_playback_thread(context));

        match spawned {
            Ok(handle) => {
                self.playback_thread_handle = Some(handle);
                Ok(())
            }
            Err(err) => {
                self.clock.request_stop();
                self.clock.finish();
                Err(PlaybackError::Io(err))
            }
        }
    }

    /// Join the worker thread if one was started. No-op otherwise.
    pub(in crate::playback::player) fn join_playback_thread(&mut self) {
        let Some(handle) = self.playback_thread_handle.take() else {
            return;
        };

        if handle.thread().id() == thread::current().id() {
            warn!("join requested from the playback thread; skipping join");
            return;
        }
        if handle.join().is_err() {
            warn!("playback thread panicked during join");
        }
    }
}
