//! Playback worker loop implementation.

use log::info;

use crate::playback::events::{emit, FinishReason, PlaybackEvent};
use crate::playback::pacer::Pace;
use crate::playback::session_log::SessionLog;

use super::context::ThreadContext;
use super::guard::PlaybackThreadGuard;

/// Run the worker loop for one session.
///
/// Each iteration blocks until the clock is runnable or stopped, waits one
/// tick without holding the clock lock, advances the clock and reports the new
/// position. The loop exits on stop or when the track duration is reached.
pub(in crate::playback::player::runtime) fn run_playback_thread(ctx: ThreadContext) {
    let thread_guard = PlaybackThreadGuard::new(ctx.clock.clone());
    let mut session_log = SessionLog::open(ctx.log_path.as_deref());

    let track_name = ctx.track.name();
    let duration_secs = ctx.track.duration_secs();

    let reason = loop {
        let snapshot = ctx.clock.wait_until_runnable_or_stopped();
        if snapshot.stopped {
            break FinishReason::Stopped;
        }
        if snapshot.position_secs >= duration_secs {
            break FinishReason::Completed;
        }

        if ctx.pacer.pace(&ctx.clock) == Pace::Stopped {
            break FinishReason::Stopped;
        }

        let Some(tick) = ctx.clock.tick(duration_secs) else {
            break FinishReason::Stopped;
        };

        info!("Playing: {} - {}s", track_name, tick.position_secs);
        session_log.record_progress(track_name, tick.position_secs);
        emit(
            &ctx.observer,
            PlaybackEvent::Progress {
                track: track_name.to_string(),
                position_secs: tick.position_secs,
            },
        );

        if tick.done {
            break FinishReason::Completed;
        }
    };

    #[cfg(feature = "debug")]
    log::info!("worker loop finished: {:?}", reason);

    drop(session_log);
    let position_secs = match thread_guard.finish() {
        Some(snapshot) => snapshot.position_secs,
        None => ctx.clock.position(),
    };

    if reason == FinishReason::Completed {
        info!("Finished {} at {}s.", track_name, position_secs);
    }
    emit(
        &ctx.observer,
        PlaybackEvent::Finished {
            track: track_name.to_string(),
            position_secs,
            reason,
        },
    );
}
