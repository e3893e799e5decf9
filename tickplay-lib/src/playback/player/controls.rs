//! Transport and lifecycle operations for `Player`.
//!
//! Methods here coordinate clock transitions with the worker thread and expose
//! the user-facing control primitives (load/play/pause/resume/stop) plus a few
//! synchronized status accessors.

use log::{debug, error, info, warn};

use crate::error::PlaybackError;
use crate::playback::clock::ClockSnapshot;
use crate::playback::events::{emit, PlaybackEvent};
use crate::track::Track;

use super::Player;

impl Player {
    /// Load `track` and rewind the clock to 0.
    ///
    /// Rejected with [`PlaybackError::SessionActive`] while a worker is alive.
    pub fn load(&mut self, track: Track) -> Result<(), PlaybackError> {
        if self.session_alive() {
            warn!("Cannot load {} while a session is active; stop first.", track);
            return Err(PlaybackError::SessionActive);
        }

        if self.settings.reject_empty_tracks {
            if let Err(err) = track.validate() {
                warn!("Refusing to load track: {}", err);
                return Err(err);
            }
        }

        self.join_playback_thread();

        track.announce();
        emit(
            &self.observer,
            PlaybackEvent::Loaded {
                track: track.name().to_string(),
                duration_secs: track.duration_secs(),
            },
        );

        self.clock.reset();
        self.track = Some(track);
        Ok(())
    }

    /// Start a playback session from the current position.
    ///
    /// Only one worker may exist at a time: a playing session yields
    /// [`PlaybackError::AlreadyPlaying`], a paused one
    /// [`PlaybackError::SessionActive`] (use [`Player::resume`]). A worker that
    /// already ran to the end is joined before the new one starts.
    pub fn play(&mut self) -> Result<(), PlaybackError> {
        let Some(track) = self.track.clone() else {
            warn!("No track loaded.");
            return Err(PlaybackError::NoTrackLoaded);
        };

        if self.session_alive() {
            let snapshot = self.clock.snapshot();
            if snapshot.playing {
                info!("Already playing.");
                return Err(PlaybackError::AlreadyPlaying);
            }
            warn!(
                "Session is paused at {}s; resume it instead of starting a new one.",
                snapshot.position_secs
            );
            return Err(PlaybackError::SessionActive);
        }

        self.join_playback_thread();

        let position_secs = self.clock.position();
        info!("Playing {} from {}s.", track.name(), position_secs);
        emit(
            &self.observer,
            PlaybackEvent::Started {
                track: track.name().to_string(),
                position_secs,
            },
        );

        if let Err(err) = self.initialize_thread(track) {
            error!("failed to spawn playback thread: {}", err);
            return Err(err);
        }
        Ok(())
    }

    /// Pause playback and report the position. Idempotent.
    ///
    /// A tick already in flight still completes; the worker then waits.
    pub fn pause(&self) {
        let before = self.clock.set_playing(false);
        if before.playing {
            info!("Paused at {}s.", before.position_secs);
            emit(
                &self.observer,
                PlaybackEvent::Paused {
                    position_secs: before.position_secs,
                },
            );
        } else {
            debug!("pause ignored: not playing ({}s)", before.position_secs);
        }
    }

    /// Resume a paused session. Idempotent; does nothing without a session.
    pub fn resume(&self) {
        let resumed = if self.playback_thread_handle.is_some() {
            self.clock.resume_session()
        } else {
            None
        };
        let Some(before) = resumed else {
            info!("Nothing to resume.");
            return;
        };

        if before.playing {
            debug!("resume ignored: already playing");
            return;
        }

        info!("Resumed at {}s.", before.position_secs);
        emit(
            &self.observer,
            PlaybackEvent::Resumed {
                position_secs: before.position_secs,
            },
        );
    }

    /// Stop the current session and wait for its worker to exit.
    ///
    /// Safe to call without a session and safe to call twice.
    pub fn stop(&mut self) {
        self.clock.request_stop();

        if self.playback_thread_handle.is_none() {
            debug!("stop ignored: no playback session");
            return;
        }

        self.join_playback_thread();

        let position_secs = self.clock.position();
        info!("Stopped at {}s.", position_secs);
        emit(&self.observer, PlaybackEvent::Stopped { position_secs });
    }

    /// Block until the current session ends on its own or is stopped.
    ///
    /// Returns immediately when no session exists. A paused session keeps
    /// this call blocked until another thread resumes or stops it.
    pub fn wait_until_finished(&self) -> ClockSnapshot {
        if self.playback_thread_handle.is_none() {
            return self.clock.snapshot();
        }
        self.clock.wait_until_finished()
    }

    /// Current position in seconds, read under the clock lock.
    pub fn position(&self) -> u64 {
        self.clock.position()
    }

    /// Return true if a session is alive and playing.
    pub fn is_playing(&self) -> bool {
        self.session_alive() && self.clock.snapshot().playing
    }

    /// Return true if a session is alive and paused.
    pub fn is_paused(&self) -> bool {
        self.session_alive() && self.clock.snapshot().paused()
    }

    /// Return true when no worker is running.
    pub fn is_finished(&self) -> bool {
        !self.session_alive()
    }
}
