//! # gochan-runtime
//!
//! Blocking primitives for gochan. Everything here may put the
//! calling OS thread to sleep, through the platform parker (futex on
//! Linux, condvar elsewhere).
//!
//! ## Modules
//!
//! - `parking` - task parking (eventcount over futex/condvar)
//! - `channel` - blocking MPMC channel with Go-style close
//! - `waitgroup` - completion signal for a known number of tasks
//! - `task` - OS-thread task spawning

pub mod channel;
pub mod parking;
pub mod task;
pub mod waitgroup;

// Re-exports for convenience
pub use channel::{channel, Iter, Receiver, Sender};
pub use task::{spawn, TaskHandle};
pub use waitgroup::{WaitGroup, WaitGuard};
