//! Channel lifecycle state

use core::fmt;

/// Lifecycle state of a channel
///
/// A channel moves through at most three states, in order:
///
/// ```text
/// Open ──close()──▶ Draining ──last recv──▶ Drained
///   │                                          ▲
///   └────────close() with empty buffer─────────┘
/// ```
///
/// The Open → closed transition happens exactly once. A closed channel
/// still yields buffered messages (`Draining`) until the buffer is
/// empty (`Drained`, terminal).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ChannelState {
    /// Accepting sends; buffer may or may not hold messages
    Open = 0,

    /// Closed with buffered messages still readable
    Draining = 1,

    /// Closed and empty; reads return the closed signal
    Drained = 2,
}

impl ChannelState {
    /// Check whether sends are still permitted
    #[inline]
    pub const fn accepts_sends(&self) -> bool {
        matches!(self, ChannelState::Open)
    }

    /// Check whether the one-shot close has happened
    #[inline]
    pub const fn is_closed(&self) -> bool {
        matches!(self, ChannelState::Draining | ChannelState::Drained)
    }

    /// Check whether this is the terminal state
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, ChannelState::Drained)
    }
}

impl fmt::Display for ChannelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelState::Open => write!(f, "open"),
            ChannelState::Draining => write!(f, "closed-nonempty"),
            ChannelState::Drained => write!(f, "closed-empty"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_predicates() {
        assert!(ChannelState::Open.accepts_sends());
        assert!(!ChannelState::Draining.accepts_sends());
        assert!(!ChannelState::Drained.accepts_sends());

        assert!(!ChannelState::Open.is_closed());
        assert!(ChannelState::Draining.is_closed());
        assert!(ChannelState::Drained.is_closed());

        assert!(ChannelState::Drained.is_terminal());
        assert!(!ChannelState::Draining.is_terminal());
    }

    #[test]
    fn test_state_display() {
        assert_eq!(ChannelState::Open.to_string(), "open");
        assert_eq!(ChannelState::Draining.to_string(), "closed-nonempty");
        assert_eq!(ChannelState::Drained.to_string(), "closed-empty");
    }
}
