//! Playback clock, worker runtime and the `Player` controller.

pub mod clock;
pub mod events;
pub mod pacer;
pub mod player;
pub mod session_log;
