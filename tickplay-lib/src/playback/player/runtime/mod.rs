//! Internal runtime plumbing for the `Player` worker thread.
//!
//! The runtime is split so spawn-time concerns stay separate from the
//! long-lived tick loop:
//! - [`thread`] arms the clock, captures shared state and spawns/joins.
//! - [`worker`] runs the wait/tick/report loop.

mod thread;
mod worker;
