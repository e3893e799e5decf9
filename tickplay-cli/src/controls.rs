//! Scripted transport sequence for the demo run.

use std::thread::sleep;
use std::time::{Duration, Instant};

use log::info;
use tickplay_lib::{PlaybackError, Player, Track};

/// Tick counts for each phase of the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Script {
    pub pause_after: u64,
    pub pause_for: u64,
    pub resume_for: u64,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            pause_after: 3,
            pause_for: 2,
            resume_for: 5,
        }
    }
}

/// Load `track`, then play, pause, resume and stop on the script's schedule.
///
/// Waits are cut short once the worker has finished on its own; the remaining
/// commands still run so their idempotent paths are exercised.
pub fn run_script(
    player: &mut Player,
    track: Track,
    script: &Script,
    tick: Duration,
) -> Result<(), PlaybackError> {
    player.load(track)?;
    player.play()?;

    wait_ticks(player, script.pause_after, tick);
    player.pause();

    wait_ticks(player, script.pause_for, tick);
    player.resume();

    wait_ticks(player, script.resume_for, tick);
    player.stop();

    info!("Final position: {}s.", player.position());
    Ok(())
}

fn wait_ticks(player: &Player, ticks: u64, tick: Duration) {
    let span = tick.saturating_mul(ticks.min(u32::MAX as u64) as u32);
    // An unrepresentable deadline waits until the track ends.
    let deadline = Instant::now().checked_add(span);
    while !player.is_finished() {
        let now = Instant::now();
        let remaining = match deadline {
            Some(deadline) if now >= deadline => break,
            Some(deadline) => deadline - now,
            None => Duration::MAX,
        };
        sleep(remaining.min(Duration::from_millis(50)));
    }
}

#[cfg(test)]
mod tests {
    use super::{run_script, wait_ticks, Script};
    use std::time::Duration;
    use tickplay_lib::{PlaybackError, Player, PlayerSettings, PlayerState, Track};

    fn quiet_player(tick_ms: u64) -> Player {
        Player::new(PlayerSettings {
            tick_ms,
            log_path: None,
            reject_empty_tracks: true,
        })
    }

    #[test]
    fn short_track_finishes_before_the_script_ends() {
        let mut player = quiet_player(2);
        let script = Script {
            pause_after: 50,
            pause_for: 1,
            resume_for: 1,
        };
        run_script(&mut player, Track::new("short.wav", 2), &script, Duration::from_millis(2))
            .unwrap();
        assert_eq!(player.position(), 2);
        assert_eq!(player.state(), PlayerState::Finished);
    }

    #[test]
    fn script_stops_a_long_track() {
        let mut player = quiet_player(5);
        let script = Script {
            pause_after: 2,
            pause_for: 1,
            resume_for: 2,
        };
        run_script(&mut player, Track::new("long.wav", 1_000), &script, Duration::from_millis(5))
            .unwrap();
        assert!(player.position() < 1_000);
        assert_eq!(player.state(), PlayerState::Stopped);
    }

    #[test]
    fn empty_track_is_reported() {
        let mut player = quiet_player(5);
        let err = run_script(
            &mut player,
            Track::new("empty.wav", 0),
            &Script::default(),
            Duration::from_millis(5),
        )
        .unwrap_err();
        assert!(matches!(err, PlaybackError::InvalidTrack(_)));
    }

    #[test]
    fn huge_wait_ends_when_the_track_does() {
        let mut player = quiet_player(2);
        player.load(Track::new("short.wav", 2)).unwrap();
        player.play().unwrap();
        wait_ticks(&player, u32::MAX as u64, Duration::from_millis(u64::MAX));
        assert!(player.is_finished());
        player.stop();
        assert_eq!(player.position(), 2);
    }
}
