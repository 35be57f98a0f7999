//! Turn-level state of a session and its concurrency guard.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::AiError;

/// Where a session is within the handling of one user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnState {
    #[default]
    AwaitingUserInput,
    /// A request to the model is in flight.
    ModelRequested,
    /// The model asked for a tool and the inventory fetch is in flight.
    ToolRequested,
    /// The last message was answered with model text.
    Responded,
}

impl TurnState {
    /// Whether a new user message may start.
    pub fn is_idle(self) -> bool {
        matches!(self, Self::AwaitingUserInput | Self::Responded)
    }
}

/// Holds a session's busy flag for one message; clears it on drop,
/// including when the message future is cancelled.
pub(crate) struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    /// Take the flag, or fail with [`AiError::Busy`] if it is already held.
    pub(crate) fn acquire(flag: &'a AtomicBool) -> Result<Self, AiError> {
        if flag
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(AiError::Busy);
        }
        Ok(Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
