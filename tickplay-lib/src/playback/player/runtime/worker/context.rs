//! Shared runtime context captured at thread spawn time.

use std::path::PathBuf;
use std::sync::Arc;

use crate::playback::clock::PlaybackClock;
use crate::playback::events::EventObserver;
use crate::playback::pacer::Pacer;
use crate::track::Track;

/// Captured state passed from `Player::initialize_thread` into the worker.
pub(in crate::playback::player::runtime) struct ThreadContext {
    pub(in crate::playback::player::runtime) clock: Arc<PlaybackClock>,
    pub(in crate::playback::player::runtime) track: Track,
    pub(in crate::playback::player::runtime) pacer: Arc<dyn Pacer>,
    pub(in crate::playback::player::runtime) observer: Option<EventObserver>,
    pub(in crate::playback::player::runtime) log_path: Option<PathBuf>,
}
