//! WaitGroup completion signal
//!
//! Counts outstanding tasks; `wait()` blocks until every registered
//! task has signalled completion. The usual pattern is a [`WaitGuard`]
//! per task, taken by the coordinator before spawning and dropped by
//! the task on any exit path, including panics:
//!
//! ```ignore
//! let wg = WaitGroup::new();
//! let done = wg.guard();
//! spawn(move || {
//!     let _done = done;
//!     // ... task body ...
//! });
//! wg.wait();
//! ```
//!
//! `add`/`done` exist for code ported from Go; the guard form is
//! preferred because completion cannot be forgotten.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use gochan_core::kerror;

use crate::parking::{PlatformParking, TaskParking};

/// A completion signal for a known number of concurrent tasks
///
/// Cloning produces another handle to the same counter.
#[derive(Clone)]
pub struct WaitGroup {
    inner: Arc<WgInner>,
}

struct WgInner {
    /// Outstanding completions
    count: AtomicUsize,

    /// Parks tasks blocked in wait()
    parking: PlatformParking,
}

impl WaitGroup {
    /// Create a WaitGroup with no outstanding completions
    pub fn new() -> Self {
        WaitGroup {
            inner: Arc::new(WgInner {
                count: AtomicUsize::new(0),
                parking: PlatformParking::new(),
            }),
        }
    }

    /// Register `n` expected completions
    ///
    /// Must happen before the matching tasks are spawned, so the
    /// counter can never be observed at zero while work is pending.
    pub fn add(&self, n: usize) {
        self.inner.count.fetch_add(n, Ordering::SeqCst);
    }

    /// Signal one completion
    ///
    /// A call with no outstanding registration is logged and ignored.
    pub fn done(&self) {
        complete(&self.inner);
    }

    /// Register one expected completion and return its guard
    ///
    /// The guard signals completion when dropped, on every exit path.
    pub fn guard(&self) -> WaitGuard {
        self.add(1);
        WaitGuard {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Block until the outstanding count reaches zero
    ///
    /// Returns immediately if nothing is outstanding.
    pub fn wait(&self) {
        loop {
            let epoch = self.inner.parking.epoch();
            if self.inner.count.load(Ordering::SeqCst) == 0 {
                return;
            }
            self.inner.parking.park(epoch, None);
        }
    }

    /// Number of completions still outstanding
    pub fn pending(&self) -> usize {
        self.inner.count.load(Ordering::SeqCst)
    }
}

impl Default for WaitGroup {
    fn default() -> Self {
        Self::new()
    }
}

fn complete(inner: &WgInner) {
    let prev = inner
        .count
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |c| c.checked_sub(1));
    match prev {
        Ok(1) => inner.parking.wake_all(),
        Ok(_) => {}
        Err(_) => kerror!("WaitGroup: done() without matching add()"),
    }
}

/// Scope guard that signals one completion when dropped
///
/// Returned by [`WaitGroup::guard`]. Hold it for the lifetime of the
/// task; dropping it (normally or during unwind) decrements the
/// WaitGroup exactly once.
pub struct WaitGuard {
    inner: Arc<WgInner>,
}

impl Drop for WaitGuard {
    fn drop(&mut self) {
        complete(&self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_wait_with_nothing_outstanding() {
        let wg = WaitGroup::new();
        wg.wait();
        assert_eq!(wg.pending(), 0);
    }

    #[test]
    fn test_add_done() {
        let wg = WaitGroup::new();
        wg.add(2);
        assert_eq!(wg.pending(), 2);
        wg.done();
        wg.done();
        assert_eq!(wg.pending(), 0);
        wg.wait();
    }

    #[test]
    fn test_underflow_is_ignored() {
        let wg = WaitGroup::new();
        wg.done();
        assert_eq!(wg.pending(), 0);
    }

    #[test]
    fn test_wait_blocks_for_two_tasks() {
        let wg = WaitGroup::new();
        let mut guards = vec![wg.guard(), wg.guard()];

        let mut handles = vec![];
        for guard in guards.drain(..) {
            handles.push(thread::spawn(move || {
                thread::sleep(Duration::from_millis(50));
                drop(guard);
            }));
        }

        wg.wait();
        assert_eq!(wg.pending(), 0);

        for h in handles {
            h.join().unwrap();
        }
    }

    #[test]
    fn test_guard_signals_on_panic() {
        let wg = WaitGroup::new();
        let guard = wg.guard();

        let handle = thread::spawn(move || {
            let _done = guard;
            panic!("task failed");
        });

        // The guard must release the waiter despite the panic
        wg.wait();
        assert!(handle.join().is_err());
    }

    #[test]
    fn test_clone_shares_counter() {
        let wg = WaitGroup::new();
        let wg2 = wg.clone();
        wg.add(1);
        assert_eq!(wg2.pending(), 1);
        wg2.done();
        assert_eq!(wg.pending(), 0);
    }
}
