//! Task spawning
//!
//! Goroutine-style tasks map to named OS threads. Tasks are usually
//! coordinated through a `WaitGroup` rather than joined; the handle
//! exists for callers that want the join and a typed panic result.

use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

use gochan_core::error::{ChanError, ChanResult};
use gochan_core::id::TaskId;
use gochan_core::ktrace;

static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(0);

/// Handle to a spawned task
pub struct TaskHandle {
    id: TaskId,
    thread: thread::JoinHandle<()>,
}

impl TaskHandle {
    /// The task's process-unique id
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Wait for the task to finish
    ///
    /// A panicked task reports `Err(TaskPanicked)` instead of
    /// propagating the panic payload.
    pub fn join(self) -> ChanResult<()> {
        self.thread.join().map_err(|_| ChanError::TaskPanicked)
    }
}

/// Spawn a concurrent task on a new OS thread
///
/// The thread is named `gochan-task-<id>` so it is identifiable in
/// debuggers and thread dumps.
pub fn spawn<F>(f: F) -> TaskHandle
where
    F: FnOnce() + Send + 'static,
{
    let id = TaskId::new(NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed));
    let thread = thread::Builder::new()
        .name(format!("gochan-task-{}", id))
        .spawn(f)
        .expect("failed to spawn task thread");
    ktrace!("spawned task {}", id);
    TaskHandle { id, thread }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;

    #[test]
    fn test_spawn_and_join() {
        let ran = Arc::new(AtomicBool::new(false));
        let ran2 = Arc::clone(&ran);

        let handle = spawn(move || {
            ran2.store(true, Ordering::SeqCst);
        });

        assert!(handle.join().is_ok());
        assert!(ran.load(Ordering::SeqCst));
    }

    #[test]
    fn test_ids_are_unique() {
        let a = spawn(|| {});
        let b = spawn(|| {});
        assert_ne!(a.id(), b.id());
        a.join().unwrap();
        b.join().unwrap();
    }

    #[test]
    fn test_join_reports_panic() {
        let handle = spawn(|| panic!("boom"));
        assert_eq!(handle.join(), Err(ChanError::TaskPanicked));
    }
}
