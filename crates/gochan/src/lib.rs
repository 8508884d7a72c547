//! # gochan - Go-style channels for Rust
//!
//! Producer/consumer message passing over a bounded or rendezvous
//! channel, with goroutine-style tasks and a WaitGroup completion
//! signal.
//!
//! ## Quick Start
//!
//! ```ignore
//! use gochan::{channel, go, WaitGroup};
//!
//! fn main() {
//!     let wg = WaitGroup::new();
//!     let (tx, rx) = channel::<String>(0); // rendezvous
//!
//!     let done = wg.guard();
//!     go(move || {
//!         let _done = done;
//!         while let Ok(msg) = rx.recv() {
//!             println!("got {}", msg);
//!         }
//!     });
//!
//!     let done = wg.guard();
//!     go(move || {
//!         let _done = done;
//!         tx.send("hello".to_string()).ok();
//!         tx.close();
//!     });
//!
//!     wg.wait();
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐    send / close     ┌──────────────┐
//! │   Producer   │ ──────────────────▶ │   Channel    │
//! │    task      │                     │  FIFO + close│
//! └──────┬───────┘                     └──────┬───────┘
//!        │                                    │ recv
//!        │ WaitGuard                          ▼
//!        │                             ┌──────────────┐
//!        │          ┌───────────────── │   Consumer   │
//!        ▼          ▼ WaitGuard        │    task      │
//! ┌─────────────────────────┐          └──────────────┘
//! │  WaitGroup (coordinator │
//! │  blocks in wait())      │
//! └─────────────────────────┘
//! ```
//!
//! Blocked sends and receives park the OS thread (futex on Linux,
//! condvar elsewhere); closure is one-shot and buffered messages stay
//! readable until drained.

// Re-export core types
pub use gochan_core::{
    ChanError, ChanResult, ChannelState, TaskId, TryRecvError, TrySendError,
};

// Re-export kprint macros for debug logging
pub use gochan_core::{kdebug, kerror, kinfo, kprintln, ktrace, kwarn};
pub use gochan_core::kprint::{init as init_logging, set_flush_enabled, set_log_level, LogLevel};

// Re-export env utilities
pub use gochan_core::{env_get, env_get_bool, env_get_str, env_is_set};

// Re-export runtime types
pub use gochan_runtime::{channel, Iter, Receiver, Sender};
pub use gochan_runtime::{spawn, TaskHandle};
pub use gochan_runtime::{WaitGroup, WaitGuard};

/// Spawn a concurrent task, Go style
///
/// Alias for [`spawn`] that reads like the `go` statement it mirrors:
///
/// ```ignore
/// go(move || consume(rx));
/// ```
pub fn go<F>(f: F) -> TaskHandle
where
    F: FnOnce() + Send + 'static,
{
    gochan_runtime::task::spawn(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    // The two example programs, run as semantic scenarios: same
    // messages, same channel shapes, outputs collected instead of
    // printed.

    #[test]
    fn test_rendezvous_producer_consumer_in_order() {
        let wg = WaitGroup::new();
        let (tx, rx) = channel::<String>(0);
        let (seen_tx, seen_rx) = channel::<String>(16);

        let done = wg.guard();
        go(move || {
            let _done = done;
            loop {
                match rx.recv() {
                    Ok(msg) => seen_tx.send(msg).unwrap(),
                    Err(_) => {
                        seen_tx.send("<closed>".to_string()).unwrap();
                        seen_tx.close();
                        break;
                    }
                }
            }
        });

        let done = wg.guard();
        go(move || {
            let _done = done;
            for i in 0..5 {
                tx.send(format!("Hello {}", i)).unwrap();
            }
            assert!(tx.close());
        });

        wg.wait();

        let seen: Vec<_> = seen_rx.iter().collect();
        assert_eq!(
            seen,
            vec![
                "Hello 0", "Hello 1", "Hello 2", "Hello 3", "Hello 4", "<closed>",
            ]
        );
    }

    #[test]
    fn test_buffered_single_read_then_coordinator_drain() {
        let wg = WaitGroup::new();
        let (tx, rx) = channel::<&str>(3);
        let drain_rx = rx.clone();

        let (first_tx, first_rx) = channel::<&str>(1);

        let done = wg.guard();
        go(move || {
            let _done = done;
            // Single-read consumer
            let msg = rx.recv().unwrap();
            first_tx.send(msg).unwrap();
            first_tx.close();
        });

        let done = wg.guard();
        go(move || {
            let _done = done;
            for msg in ["Hello", "World", "Bye"] {
                tx.send(msg).unwrap();
            }
            assert!(tx.close());
        });

        wg.wait();

        // Consumer observed exactly the first message
        assert_eq!(first_rx.iter().collect::<Vec<_>>(), vec!["Hello"]);

        // Residual buffered messages drain in order after the join
        assert_eq!(drain_rx.state(), ChannelState::Draining);
        let leftover: Vec<_> = drain_rx.iter().collect();
        assert_eq!(leftover, vec!["World", "Bye"]);
        assert_eq!(drain_rx.state(), ChannelState::Drained);
    }

    #[test]
    fn test_coordinator_join_completes() {
        // Liveness: run the rendezvous shape several times to shake
        // out interleavings.
        for _ in 0..20 {
            let wg = WaitGroup::new();
            let (tx, rx) = channel::<u32>(0);

            let done = wg.guard();
            go(move || {
                let _done = done;
                while rx.recv().is_ok() {}
            });

            let done = wg.guard();
            go(move || {
                let _done = done;
                for i in 0..5 {
                    tx.send(i).unwrap();
                }
                tx.close();
            });

            wg.wait();
        }
    }

    #[test]
    fn test_go_returns_joinable_handle() {
        let handle = go(|| {});
        assert!(!handle.id().is_none());
        assert!(handle.join().is_ok());
    }
}
