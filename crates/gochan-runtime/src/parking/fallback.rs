//! Fallback parking using std::sync::Condvar
//!
//! Used on platforms without futex support. The wake sequence lives
//! under the mutex, so the epoch comparison and the condvar wait are
//! atomic with respect to wakers.

use super::TaskParking;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Condvar, Mutex};
use std::time::{Duration, Instant};

/// Condvar-based parking (portable fallback)
pub struct FallbackParking {
    /// Wake sequence number
    seq: Mutex<u32>,

    condvar: Condvar,

    /// Count of parked tasks
    parked: AtomicUsize,
}

impl FallbackParking {
    pub fn new() -> Self {
        Self {
            seq: Mutex::new(0),
            condvar: Condvar::new(),
            parked: AtomicUsize::new(0),
        }
    }
}

impl Default for FallbackParking {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskParking for FallbackParking {
    fn epoch(&self) -> u32 {
        *self.seq.lock().unwrap()
    }

    fn park(&self, epoch: u32, timeout: Option<Duration>) -> bool {
        let deadline = timeout.map(|t| Instant::now() + t);
        let mut seq = self.seq.lock().unwrap();

        self.parked.fetch_add(1, Ordering::SeqCst);
        let woken = loop {
            if *seq != epoch {
                break true;
            }
            match deadline {
                Some(d) => {
                    let now = Instant::now();
                    if now >= d {
                        break false;
                    }
                    let (guard, _) = self.condvar.wait_timeout(seq, d - now).unwrap();
                    seq = guard;
                }
                None => {
                    seq = self.condvar.wait(seq).unwrap();
                }
            }
        };
        self.parked.fetch_sub(1, Ordering::SeqCst);

        woken
    }

    fn wake_one(&self) {
        let mut seq = self.seq.lock().unwrap();
        *seq = seq.wrapping_add(1);
        drop(seq);
        // notify_all, not notify_one: a notified waiter whose epoch is
        // still current would re-wait and the wake would stall.
        self.condvar.notify_all();
    }

    fn wake_all(&self) {
        let mut seq = self.seq.lock().unwrap();
        *seq = seq.wrapping_add(1);
        drop(seq);
        self.condvar.notify_all();
    }

    fn waiters(&self) -> usize {
        self.parked.load(Ordering::Relaxed)
    }
}
