//! Error types for channel and task operations

use core::fmt;

/// Result type for channel and task operations
pub type ChanResult<T> = Result<T, ChanError>;

/// Errors that can occur on channels and tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChanError {
    /// Channel was closed (terminal signal, not a failure)
    Closed,

    /// Channel is full (for try_send)
    Full,

    /// Channel is empty (for try_recv)
    Empty,

    /// Task panicked before completing
    TaskPanicked,
}

impl fmt::Display for ChanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChanError::Closed => write!(f, "channel closed"),
            ChanError::Full => write!(f, "channel full"),
            ChanError::Empty => write!(f, "channel empty"),
            ChanError::TaskPanicked => write!(f, "task panicked"),
        }
    }
}

impl std::error::Error for ChanError {}

/// Error returned by `try_send`, carrying the unsent value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrySendError<T> {
    /// Buffer full (or no waiting receiver on a rendezvous channel)
    Full(T),

    /// Channel closed before the send
    Closed(T),
}

impl<T> TrySendError<T> {
    /// Recover the value that could not be sent
    pub fn into_inner(self) -> T {
        match self {
            TrySendError::Full(v) | TrySendError::Closed(v) => v,
        }
    }

    /// True if the channel was closed
    pub fn is_closed(&self) -> bool {
        matches!(self, TrySendError::Closed(_))
    }
}

impl<T> fmt::Display for TrySendError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrySendError::Full(_) => write!(f, "channel full"),
            TrySendError::Closed(_) => write!(f, "channel closed"),
        }
    }
}

/// Error returned by `try_recv`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TryRecvError {
    /// No message available, channel still open
    Empty,

    /// Channel closed and fully drained
    Closed,
}

impl fmt::Display for TryRecvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TryRecvError::Empty => write!(f, "channel empty"),
            TryRecvError::Closed => write!(f, "channel closed"),
        }
    }
}

impl From<TryRecvError> for ChanError {
    fn from(e: TryRecvError) -> Self {
        match e {
            TryRecvError::Empty => ChanError::Empty,
            TryRecvError::Closed => ChanError::Closed,
        }
    }
}

impl<T> From<TrySendError<T>> for ChanError {
    fn from(e: TrySendError<T>) -> Self {
        match e {
            TrySendError::Full(_) => ChanError::Full,
            TrySendError::Closed(_) => ChanError::Closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(format!("{}", ChanError::Closed), "channel closed");
        assert_eq!(format!("{}", ChanError::TaskPanicked), "task panicked");
        assert_eq!(format!("{}", TryRecvError::Empty), "channel empty");
    }

    #[test]
    fn test_try_send_into_inner() {
        let e = TrySendError::Full("hello");
        assert!(!e.is_closed());
        assert_eq!(e.into_inner(), "hello");

        let e = TrySendError::Closed(42);
        assert!(e.is_closed());
        assert_eq!(e.into_inner(), 42);
    }

    #[test]
    fn test_error_conversion() {
        let e: ChanError = TryRecvError::Closed.into();
        assert_eq!(e, ChanError::Closed);

        let e: ChanError = TrySendError::Full(()).into();
        assert_eq!(e, ChanError::Full);
    }
}
