//! Linux futex-based task parking
//!
//! The eventcount sequence number doubles as the futex word:
//!
//! 1. Waiter snapshots the word (under its condition lock)
//! 2. FUTEX_WAIT blocks only while the word still equals the snapshot
//! 3. Wakers bump the word, then FUTEX_WAKE
//!
//! A wake between snapshot and FUTEX_WAIT changes the word, so the
//! wait returns EAGAIN instead of sleeping through the wake.

use super::TaskParking;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use std::time::Duration;

/// Linux futex-based parking
pub struct FutexParking {
    /// Wake sequence number, also the futex word
    seq: AtomicU32,

    /// Count of parked tasks, used to skip wake syscalls
    parked: AtomicUsize,
}

impl FutexParking {
    pub fn new() -> Self {
        Self {
            seq: AtomicU32::new(0),
            parked: AtomicUsize::new(0),
        }
    }

    fn futex_wait(&self, expected: u32, timeout: Option<Duration>) -> i64 {
        let timespec = timeout.map(|d| libc::timespec {
            tv_sec: d.as_secs() as i64,
            tv_nsec: d.subsec_nanos() as i64,
        });

        let timespec_ptr = match &timespec {
            Some(ts) => ts as *const libc::timespec,
            None => std::ptr::null(),
        };

        unsafe {
            libc::syscall(
                libc::SYS_futex,
                self.seq.as_ptr(),
                libc::FUTEX_WAIT | libc::FUTEX_PRIVATE_FLAG,
                expected,
                timespec_ptr,
                std::ptr::null::<u32>(),
                0u32,
            )
        }
    }

    fn futex_wake(&self, count: i32) {
        unsafe {
            libc::syscall(
                libc::SYS_futex,
                self.seq.as_ptr(),
                libc::FUTEX_WAKE | libc::FUTEX_PRIVATE_FLAG,
                count,
                std::ptr::null::<libc::timespec>(),
                std::ptr::null::<u32>(),
                0u32,
            );
        }
    }
}

impl Default for FutexParking {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskParking for FutexParking {
    fn epoch(&self) -> u32 {
        self.seq.load(Ordering::Acquire)
    }

    fn park(&self, epoch: u32, timeout: Option<Duration>) -> bool {
        if self.seq.load(Ordering::Acquire) != epoch {
            return true;
        }

        self.parked.fetch_add(1, Ordering::SeqCst);
        let result = self.futex_wait(epoch, timeout);
        self.parked.fetch_sub(1, Ordering::SeqCst);

        if result == 0 {
            return true; // Woken by FUTEX_WAKE
        }

        // EAGAIN = sequence already moved, EINTR = signal; both mean
        // "go re-check the condition". Only a timeout reports false.
        let errno = unsafe { *libc::__errno_location() };
        errno != libc::ETIMEDOUT
    }

    fn wake_one(&self) {
        self.seq.fetch_add(1, Ordering::Release);
        if self.parked.load(Ordering::Acquire) > 0 {
            self.futex_wake(1);
        }
    }

    fn wake_all(&self) {
        self.seq.fetch_add(1, Ordering::Release);
        if self.parked.load(Ordering::Acquire) > 0 {
            self.futex_wake(i32::MAX);
        }
    }

    fn waiters(&self) -> usize {
        self.parked.load(Ordering::Relaxed)
    }
}
