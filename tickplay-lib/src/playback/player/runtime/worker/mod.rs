//! Playback worker internals.
//!
//! - [`context`] defines the state captured at spawn time.
//! - [`guard`] publishes worker termination on every exit path.
//! - [`runner`] executes the wait/tick/report loop.

mod context;
mod guard;
mod runner;

pub(in crate::playback::player::runtime) use context::ThreadContext;
pub(in crate::playback::player::runtime) use runner::run_playback_thread;
