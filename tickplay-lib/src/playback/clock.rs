//! Shared playback clock.
//!
//! `PlaybackClock` is the only state shared between a [`Player`] and its
//! worker thread. Every field lives behind one mutex, and a single condition
//! variable wakes the worker whenever the controller changes runnability or
//! asks it to stop.
//!
//! [`Player`]: crate::playback::player::Player

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Lifecycle of the worker bound to a clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    /// Spawned (or never started) and not yet waiting.
    Idle,
    /// Blocked until the clock is runnable or stopped.
    Waiting,
    /// Inside a tick delay.
    Ticking,
    /// The loop has exited.
    Finished,
}

/// Point-in-time copy of the clock fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSnapshot {
    pub position_secs: u64,
    pub playing: bool,
    pub stopped: bool,
    pub worker: WorkerState,
}

impl ClockSnapshot {
    /// Playing and not stopped.
    pub fn runnable(&self) -> bool {
        self.playing && !self.stopped
    }

    /// Neither playing nor stopped.
    pub fn paused(&self) -> bool {
        !self.playing && !self.stopped
    }
}

/// Result of one successful clock advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub position_secs: u64,
    /// The position reached the track duration.
    pub done: bool,
}

#[derive(Debug)]
struct ClockState {
    position_secs: u64,
    playing: bool,
    stopped: bool,
    worker: WorkerState,
}

impl ClockState {
    fn snapshot(&self) -> ClockSnapshot {
        ClockSnapshot {
            position_secs: self.position_secs,
            playing: self.playing,
            stopped: self.stopped,
            worker: self.worker,
        }
    }
}

/// Lock-protected playback position and transport flags.
#[derive(Debug)]
pub struct PlaybackClock {
    state: Mutex<ClockState>,
    notify: Condvar,
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackClock {
    /// Create a stopped clock at position 0.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ClockState {
                position_secs: 0,
                playing: false,
                stopped: true,
                worker: WorkerState::Idle,
            }),
            notify: Condvar::new(),
        }
    }

    // A panicking worker never leaves the fields half-written, so a poisoned
    // lock still holds consistent state.
    fn lock(&self) -> MutexGuard<'_, ClockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> ClockSnapshot {
        self.lock().snapshot()
    }

    pub fn position(&self) -> u64 {
        self.lock().position_secs
    }

    pub fn worker_state(&self) -> WorkerState {
        self.lock().worker
    }

    /// Rewind to position 0 and disarm the clock with its worker idle.
    pub fn reset(&self) {
        let mut state = self.lock();
        state.position_secs = 0;
        state.playing = false;
        state.stopped = true;
        state.worker = WorkerState::Idle;
    }

    /// Set the playing flag, waking waiters when playback becomes possible.
    ///
    /// Returns the state as it was before the change.
    pub fn set_playing(&self, playing: bool) -> ClockSnapshot {
        let mut state = self.lock();
        let before = state.snapshot();
        state.playing = playing;
        if playing {
            self.notify.notify_all();
        }
        before
    }

    /// Set `playing` on a live session, checked under the same lock.
    ///
    /// Returns the prior state, or `None` when the clock is stopped or its
    /// worker has already finished.
    pub fn resume_session(&self) -> Option<ClockSnapshot> {
        let mut state = self.lock();
        if state.stopped || state.worker == WorkerState::Finished {
            return None;
        }
        let before = state.snapshot();
        state.playing = true;
        self.notify.notify_all();
        Some(before)
    }

    /// Ask the worker to terminate and wake anything blocked on the clock.
    pub fn request_stop(&self) -> ClockSnapshot {
        let mut state = self.lock();
        state.stopped = true;
        state.playing = false;
        self.notify.notify_all();
        state.snapshot()
    }

    /// Arm the clock for a new worker: playing, not stopped, worker idle.
    pub(crate) fn begin_session(&self) {
        let mut state = self.lock();
        state.playing = true;
        state.stopped = false;
        state.worker = WorkerState::Idle;
        self.notify.notify_all();
    }

    /// Advance the position by one second, saturating at `duration_secs`.
    ///
    /// Returns `None` without touching the position once a stop was requested.
    pub fn tick(&self, duration_secs: u64) -> Option<Tick> {
        let mut state = self.lock();
        if state.stopped {
            return None;
        }
        if state.position_secs < duration_secs {
            state.position_secs += 1;
        }
        Some(Tick {
            position_secs: state.position_secs,
            done: state.position_secs >= duration_secs,
        })
    }

    /// Block until the clock is runnable or stopped.
    ///
    /// Marks the worker as `Waiting` while blocked.
    pub fn wait_until_runnable_or_stopped(&self) -> ClockSnapshot {
        let mut state = self.lock();
        state.worker = WorkerState::Waiting;
        let state = self
            .notify
            .wait_while(state, |s| !s.playing && !s.stopped)
            .unwrap_or_else(PoisonError::into_inner);
        state.snapshot()
    }

    /// Wait out one tick interval, returning early only if a stop arrives.
    ///
    /// Marks the worker as `Ticking`. Returns `true` when the full interval
    /// elapsed and `false` when the clock was stopped. Pausing does not cut
    /// the delay short.
    pub fn wait_for_tick(&self, interval: Duration) -> bool {
        let mut state = self.lock();
        state.worker = WorkerState::Ticking;
        let (state, _) = self
            .notify
            .wait_timeout_while(state, interval, |s| !s.stopped)
            .unwrap_or_else(PoisonError::into_inner);
        !state.stopped
    }

    /// Mark the worker finished, clear `playing` and wake any observer.
    pub(crate) fn finish(&self) -> ClockSnapshot {
        let mut state = self.lock();
        state.playing = false;
        state.worker = WorkerState::Finished;
        self.notify.notify_all();
        state.snapshot()
    }

    /// Block until the worker reports `Finished`.
    ///
    /// Returns immediately when no session is armed (stopped with an idle
    /// worker).
    pub fn wait_until_finished(&self) -> ClockSnapshot {
        let state = self.lock();
        let state = self
            .notify
            .wait_while(state, |s| {
                s.worker != WorkerState::Finished && !(s.stopped && s.worker == WorkerState::Idle)
            })
            .unwrap_or_else(PoisonError::into_inner);
        state.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::{PlaybackClock, WorkerState};
    use std::sync::Arc;
    use std::thread;
    use std::time::{Duration, Instant};

    #[test]
    fn new_clock_is_stopped_at_zero() {
        let clock = PlaybackClock::new();
        let snapshot = clock.snapshot();
        assert_eq!(snapshot.position_secs, 0);
        assert!(!snapshot.playing);
        assert!(snapshot.stopped);
        assert_eq!(snapshot.worker, WorkerState::Idle);
    }

    #[test]
    fn tick_saturates_at_duration() {
        let clock = PlaybackClock::new();
        clock.begin_session();
        let first = clock.tick(2).unwrap();
        assert_eq!((first.position_secs, first.done), (1, false));
        let second = clock.tick(2).unwrap();
        assert_eq!((second.position_secs, second.done), (2, true));
        let third = clock.tick(2).unwrap();
        assert_eq!((third.position_secs, third.done), (2, true));
    }

    #[test]
    fn tick_is_refused_once_stopped() {
        let clock = PlaybackClock::new();
        clock.begin_session();
        clock.tick(10);
        clock.request_stop();
        assert!(clock.tick(10).is_none());
        assert_eq!(clock.position(), 1);
    }

    #[test]
    fn reset_rewinds_position() {
        let clock = PlaybackClock::new();
        clock.begin_session();
        clock.tick(10);
        clock.tick(10);
        clock.finish();
        clock.reset();
        assert_eq!(clock.position(), 0);
        assert_eq!(clock.worker_state(), WorkerState::Idle);
        assert_eq!(clock.wait_until_finished().position_secs, 0);
    }

    #[test]
    fn set_playing_reports_previous_state() {
        let clock = PlaybackClock::new();
        clock.begin_session();
        let before = clock.set_playing(false);
        assert!(before.playing);
        assert!(clock.snapshot().paused());
        let again = clock.set_playing(false);
        assert!(!again.playing);
    }

    #[test]
    fn waiter_wakes_on_resume() {
        let clock = Arc::new(PlaybackClock::new());
        clock.begin_session();
        clock.set_playing(false);

        let waiter = {
            let clock = clock.clone();
            thread::spawn(move || clock.wait_until_runnable_or_stopped())
        };

        while clock.worker_state() != WorkerState::Waiting {
            thread::yield_now();
        }
        clock.set_playing(true);
        let snapshot = waiter.join().unwrap();
        assert!(snapshot.runnable());
    }

    #[test]
    fn waiter_wakes_on_stop() {
        let clock = Arc::new(PlaybackClock::new());
        clock.begin_session();
        clock.set_playing(false);

        let waiter = {
            let clock = clock.clone();
            thread::spawn(move || clock.wait_until_runnable_or_stopped())
        };

        while clock.worker_state() != WorkerState::Waiting {
            thread::yield_now();
        }
        clock.request_stop();
        let snapshot = waiter.join().unwrap();
        assert!(snapshot.stopped);
        assert!(!snapshot.playing);
    }

    #[test]
    fn stop_cuts_tick_wait_short() {
        let clock = Arc::new(PlaybackClock::new());
        clock.begin_session();

        let started = Instant::now();
        let ticker = {
            let clock = clock.clone();
            thread::spawn(move || clock.wait_for_tick(Duration::from_secs(30)))
        };

        while clock.worker_state() != WorkerState::Ticking {
            thread::yield_now();
        }
        clock.request_stop();
        assert!(!ticker.join().unwrap());
        assert!(started.elapsed() < Duration::from_secs(10));
    }

    #[test]
    fn pause_does_not_cut_tick_wait_short() {
        let clock = PlaybackClock::new();
        clock.begin_session();
        clock.set_playing(false);
        assert!(clock.wait_for_tick(Duration::from_millis(5)));
    }

    #[test]
    fn resume_is_refused_after_worker_finished() {
        let clock = PlaybackClock::new();
        clock.begin_session();
        clock.set_playing(false);
        clock.finish();
        assert!(clock.resume_session().is_none());
        assert!(!clock.snapshot().playing);
    }

    #[test]
    fn resume_session_restores_playing() {
        let clock = PlaybackClock::new();
        clock.begin_session();
        clock.set_playing(false);
        let before = clock.resume_session().unwrap();
        assert!(!before.playing);
        assert!(clock.snapshot().runnable());
    }

    #[test]
    fn wait_until_finished_returns_without_a_session() {
        let clock = PlaybackClock::new();
        let snapshot = clock.wait_until_finished();
        assert_eq!(snapshot.worker, WorkerState::Idle);
        assert!(snapshot.stopped);
    }
}
