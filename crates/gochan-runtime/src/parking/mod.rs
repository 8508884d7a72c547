//! Task parking mechanism
//!
//! Blocking channel operations and `WaitGroup::wait` put the calling
//! OS thread to sleep through a parker. The parker is an eventcount: a
//! sequence number that every wake advances. A waiter snapshots the
//! sequence *before* releasing the lock that protects its condition,
//! then parks only if the sequence is unchanged — a wake delivered in
//! between is detected at park time instead of being lost.

use std::time::Duration;

/// Platform-specific parking for blocked tasks
///
/// Protocol: snapshot `epoch()` while still holding the lock that
/// guards the wait condition, release the lock, then `park(epoch)`.
/// Wakers change the condition first, then call `wake_one`/`wake_all`.
/// Waiters must re-check their condition after every return.
pub trait TaskParking: Send + Sync {
    /// Current wake sequence number
    fn epoch(&self) -> u32;

    /// Park until the sequence advances past `epoch`, or timeout
    ///
    /// Returns immediately if the sequence already moved. Returns
    /// `false` only on timeout; `true` means woken (possibly
    /// spuriously — re-check the condition).
    fn park(&self, epoch: u32, timeout: Option<Duration>) -> bool;

    /// Wake one parked task
    fn wake_one(&self);

    /// Wake all parked tasks
    ///
    /// Used on channel close and WaitGroup completion.
    fn wake_all(&self);

    /// Number of currently parked tasks (hint, may be stale)
    fn waiters(&self) -> usize;
}

// Platform-specific implementations
cfg_if::cfg_if! {
    if #[cfg(target_os = "linux")] {
        mod futex_linux;
        pub use futex_linux::FutexParking as PlatformParking;
    } else {
        mod fallback;
        pub use fallback::FallbackParking as PlatformParking;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_park_timeout() {
        let parking = PlatformParking::new();
        let epoch = parking.epoch();
        let start = std::time::Instant::now();
        let woken = parking.park(epoch, Some(Duration::from_millis(50)));
        assert!(!woken);
        assert!(start.elapsed() >= Duration::from_millis(40));
    }

    #[test]
    fn test_stale_epoch_returns_immediately() {
        let parking = PlatformParking::new();
        let epoch = parking.epoch();
        parking.wake_one();
        // Wake happened between snapshot and park: must not sleep
        let woken = parking.park(epoch, Some(Duration::from_secs(10)));
        assert!(woken);
    }

    #[test]
    fn test_wake_one_unparks() {
        let parking = Arc::new(PlatformParking::new());
        let parking2 = Arc::clone(&parking);

        let handle = thread::spawn(move || {
            let epoch = parking2.epoch();
            parking2.park(epoch, Some(Duration::from_secs(10)))
        });

        // Give the thread time to park
        thread::sleep(Duration::from_millis(50));
        parking.wake_one();

        assert!(handle.join().unwrap());
    }

    #[test]
    fn test_wake_all_unparks_many() {
        let parking = Arc::new(PlatformParking::new());
        let mut handles = vec![];

        for _ in 0..4 {
            let p = Arc::clone(&parking);
            handles.push(thread::spawn(move || {
                let epoch = p.epoch();
                p.park(epoch, Some(Duration::from_secs(10)))
            }));
        }

        thread::sleep(Duration::from_millis(50));
        parking.wake_all();

        for h in handles {
            assert!(h.join().unwrap());
        }
    }
}
