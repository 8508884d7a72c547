//! Bounded MPMC channel with Go-style close semantics
//!
//! `channel(0)` gives rendezvous behavior: a send completes only once
//! a receiver has committed to take the value. `channel(n)` buffers up
//! to `n` messages and sends block only when the buffer is full.
//!
//! Closing is one-shot and separate from dropping: after `close()` no
//! send succeeds, but buffered messages stay readable until drained.
//! A blocked send or recv parks the calling OS thread; the channel
//! core is guarded by a spinlock and waiters are woken through the
//! platform parker.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use gochan_core::error::{ChanError, ChanResult, TryRecvError, TrySendError};
use gochan_core::spinlock::SpinLock;
use gochan_core::state::ChannelState;

use crate::parking::{PlatformParking, TaskParking};

/// Create a new channel with the given capacity
///
/// `capacity == 0` selects rendezvous semantics (every send waits for
/// a committed receiver); `capacity > 0` buffers that many messages.
pub fn channel<T>(capacity: usize) -> (Sender<T>, Receiver<T>) {
    let shared = Arc::new(Shared {
        core: SpinLock::new(Core {
            queue: VecDeque::with_capacity(capacity),
            closed: false,
            send_waiting: 0,
            recv_waiting: 0,
        }),
        capacity,
        send_parking: PlatformParking::new(),
        recv_parking: PlatformParking::new(),
        senders: AtomicUsize::new(1),
        receivers: AtomicUsize::new(1),
    });

    (
        Sender {
            shared: Arc::clone(&shared),
        },
        Receiver { shared },
    )
}

/// Sending half of a channel
pub struct Sender<T> {
    shared: Arc<Shared<T>>,
}

/// Receiving half of a channel
pub struct Receiver<T> {
    shared: Arc<Shared<T>>,
}

/// Mutable channel state, guarded by the spinlock
struct Core<T> {
    /// FIFO buffer of messages
    queue: VecDeque<T>,

    /// One-shot close flag
    closed: bool,

    /// Tasks blocked in send (buffer full / no committed receiver)
    send_waiting: usize,

    /// Tasks committed to receive (blocked or about to block)
    recv_waiting: usize,
}

struct Shared<T> {
    core: SpinLock<Core<T>>,

    /// Buffer size; 0 means rendezvous
    capacity: usize,

    /// Parks tasks blocked in send
    send_parking: PlatformParking,

    /// Parks tasks blocked in recv
    recv_parking: PlatformParking,

    senders: AtomicUsize,
    receivers: AtomicUsize,
}

impl<T> Shared<T> {
    /// Whether a send may deposit right now
    ///
    /// Rendezvous: only one deposit per committed receiver, so the
    /// sender blocks until a receiver is waiting.
    fn has_room(&self, core: &Core<T>) -> bool {
        if self.capacity == 0 {
            core.queue.len() < core.recv_waiting
        } else {
            core.queue.len() < self.capacity
        }
    }

    /// One-shot close; returns whether this call closed the channel
    fn close(&self) -> bool {
        let closed_now = {
            let mut core = self.core.lock();
            if core.closed {
                false
            } else {
                core.closed = true;
                true
            }
        };
        if closed_now {
            self.send_parking.wake_all();
            self.recv_parking.wake_all();
        }
        closed_now
    }

    fn state(&self) -> ChannelState {
        let core = self.core.lock();
        match (core.closed, core.queue.is_empty()) {
            (false, _) => ChannelState::Open,
            (true, false) => ChannelState::Draining,
            (true, true) => ChannelState::Drained,
        }
    }

    fn len(&self) -> usize {
        self.core.lock().queue.len()
    }

    fn is_closed(&self) -> bool {
        self.core.lock().closed
    }
}

impl<T> Sender<T> {
    /// Send a value, blocking while the channel cannot accept it
    ///
    /// Returns `Err(Closed)` if the channel is or becomes closed
    /// before the value is deposited; the value is then dropped.
    pub fn send(&self, value: T) -> ChanResult<()> {
        loop {
            let epoch;
            {
                let mut core = self.shared.core.lock();
                if core.closed {
                    return Err(ChanError::Closed);
                }
                if self.shared.has_room(&core) {
                    core.queue.push_back(value);
                    let wake = core.recv_waiting > 0;
                    drop(core);
                    if wake {
                        self.shared.recv_parking.wake_one();
                    }
                    return Ok(());
                }
                core.send_waiting += 1;
                // Snapshot under the lock: a wake after this point is
                // detected at park time.
                epoch = self.shared.send_parking.epoch();
            }
            self.shared.send_parking.park(epoch, None);
            self.shared.core.lock().send_waiting -= 1;
        }
    }

    /// Try to send without blocking
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        let mut core = self.shared.core.lock();
        if core.closed {
            return Err(TrySendError::Closed(value));
        }
        if !self.shared.has_room(&core) {
            return Err(TrySendError::Full(value));
        }
        core.queue.push_back(value);
        let wake = core.recv_waiting > 0;
        drop(core);
        if wake {
            self.shared.recv_parking.wake_one();
        }
        Ok(())
    }

    /// Close the channel
    ///
    /// Returns true if this call performed the Open → closed
    /// transition, false if the channel was already closed. Buffered
    /// messages remain readable until drained.
    pub fn close(&self) -> bool {
        self.shared.close()
    }

    /// Check if the channel is closed
    pub fn is_closed(&self) -> bool {
        self.shared.is_closed()
    }

    /// Lifecycle state of the channel
    pub fn state(&self) -> ChannelState {
        self.shared.state()
    }

    /// Number of buffered messages
    pub fn len(&self) -> usize {
        self.shared.len()
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Channel capacity (0 = rendezvous)
    pub fn capacity(&self) -> usize {
        self.shared.capacity
    }
}

impl<T> Receiver<T> {
    /// Receive a value, blocking while the channel is empty and open
    ///
    /// Returns `Err(Closed)` once the channel is closed and fully
    /// drained; buffered messages are still yielded after close.
    pub fn recv(&self) -> ChanResult<T> {
        loop {
            let epoch;
            {
                let mut core = self.shared.core.lock();
                if let Some(value) = core.queue.pop_front() {
                    let wake = core.send_waiting > 0;
                    drop(core);
                    if wake {
                        self.shared.send_parking.wake_one();
                    }
                    return Ok(value);
                }
                if core.closed {
                    return Err(ChanError::Closed);
                }
                core.recv_waiting += 1;
                epoch = self.shared.recv_parking.epoch();
                let commit_wake = self.shared.capacity == 0 && core.send_waiting > 0;
                drop(core);
                // Rendezvous: a parked sender now has a committed
                // receiver to hand off to.
                if commit_wake {
                    self.shared.send_parking.wake_one();
                }
            }
            self.shared.recv_parking.park(epoch, None);
            self.shared.core.lock().recv_waiting -= 1;
        }
    }

    /// Try to receive without blocking
    pub fn try_recv(&self) -> Result<T, TryRecvError> {
        let mut core = self.shared.core.lock();
        if let Some(value) = core.queue.pop_front() {
            let wake = core.send_waiting > 0;
            drop(core);
            if wake {
                self.shared.send_parking.wake_one();
            }
            return Ok(value);
        }
        if core.closed {
            Err(TryRecvError::Closed)
        } else {
            Err(TryRecvError::Empty)
        }
    }

    /// Iterator over received messages, ending when the channel is
    /// closed and drained
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { receiver: self }
    }

    /// Check if the channel is closed
    pub fn is_closed(&self) -> bool {
        self.shared.is_closed()
    }

    /// Lifecycle state of the channel
    pub fn state(&self) -> ChannelState {
        self.shared.state()
    }

    /// Number of buffered messages
    pub fn len(&self) -> usize {
        self.shared.len()
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Blocking iterator returned by [`Receiver::iter`]
pub struct Iter<'a, T> {
    receiver: &'a Receiver<T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.receiver.recv().ok()
    }
}

impl<'a, T> IntoIterator for &'a Receiver<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> Clone for Sender<T> {
    fn clone(&self) -> Self {
        self.shared.senders.fetch_add(1, Ordering::SeqCst);
        Sender {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T> Drop for Sender<T> {
    fn drop(&mut self) {
        // Last sender gone: nothing can be sent again, close so
        // blocked receivers observe the terminal signal.
        if self.shared.senders.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.shared.close();
        }
    }
}

impl<T> Clone for Receiver<T> {
    fn clone(&self) -> Self {
        self.shared.receivers.fetch_add(1, Ordering::SeqCst);
        Receiver {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T> Drop for Receiver<T> {
    fn drop(&mut self) {
        // Last receiver gone: close so blocked senders cannot wait
        // forever on a value nobody will take.
        if self.shared.receivers.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.shared.close();
        }
    }
}
