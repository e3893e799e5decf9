//! # Tickplay Library
//!
//! Simulated single-track playback. A [`Player`] drives one background worker
//! that advances a shared [`PlaybackClock`] once per tick, honoring
//! play/pause/resume/stop commands from the owning thread.
//!
//! [`Player`]: playback::player::Player
//! [`PlaybackClock`]: playback::clock::PlaybackClock

pub mod error;
pub mod playback;
pub mod track;

pub use error::PlaybackError;
pub use playback::events::{EventObserver, FinishReason, PlaybackEvent};
pub use playback::pacer::{IntervalPacer, Pace, Pacer};
pub use playback::player::{Player, PlayerSettings, PlayerState};
pub use track::Track;
