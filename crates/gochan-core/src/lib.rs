//! # gochan-core
//!
//! Core types for gochan, a Go-style channel and task-coordination
//! library.
//!
//! This crate is platform-agnostic and contains no OS-specific code.
//! Blocking primitives (parking, the channel itself, WaitGroup) live
//! in `gochan-runtime`.
//!
//! ## Modules
//!
//! - `id` - task identifier type
//! - `state` - channel lifecycle state
//! - `error` - error types for channel and task operations
//! - `spinlock` - internal spinlock primitive
//! - `kprint` - kernel-style debug printing macros
//! - `env` - environment variable utilities

pub mod env;
pub mod error;
pub mod id;
pub mod kprint;
pub mod spinlock;
pub mod state;

// Re-exports for convenience
pub use error::{ChanError, ChanResult, TryRecvError, TrySendError};
pub use id::TaskId;
pub use spinlock::SpinLock;
pub use state::ChannelState;
pub use env::{env_get, env_get_bool, env_get_str, env_is_set};
