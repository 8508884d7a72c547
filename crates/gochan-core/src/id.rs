//! Task identifier type

use core::fmt;

/// Unique identifier for a spawned task
///
/// Allocated from a process-wide counter; `TaskId::NONE` is reserved
/// as the "not a task" sentinel (e.g. the coordinator thread).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Sentinel value indicating no task
    pub const NONE: TaskId = TaskId(u64::MAX);

    /// Create a TaskId from a raw value
    #[inline]
    pub const fn new(id: u64) -> Self {
        TaskId(id)
    }

    /// Get the raw value
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Check if this is the NONE sentinel
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u64::MAX
    }
}

impl From<u64> for TaskId {
    #[inline]
    fn from(id: u64) -> Self {
        TaskId(id)
    }
}

impl fmt::Debug for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "TaskId(NONE)")
        } else {
            write!(f, "TaskId({})", self.0)
        }
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "none")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl Default for TaskId {
    fn default() -> Self {
        TaskId::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_basics() {
        let id = TaskId::new(7);
        assert_eq!(id.as_u64(), 7);
        assert!(!id.is_none());
        assert_eq!(format!("{}", id), "7");
    }

    #[test]
    fn test_task_id_none() {
        assert!(TaskId::NONE.is_none());
        assert!(TaskId::default().is_none());
        assert_eq!(format!("{:?}", TaskId::NONE), "TaskId(NONE)");
    }
}
