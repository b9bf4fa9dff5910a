use std::error::Error;
use std::fmt;

/// Error of a blocking send: the channel was closed before the value could
/// be deposited.
///
/// The value is handed back so the caller can keep or drop it.
pub struct SendError<T>(pub T);

impl<T> SendError<T> {
    /// Recovers the value that could not be sent.
    pub fn into_inner(self) -> T {
        self.0
    }
}

// The payload is elided so `T: Debug` is not required.
impl<T> fmt::Debug for SendError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SendError").field(&"..").finish()
    }
}

impl<T> fmt::Display for SendError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("channel is closed")
    }
}

impl<T> Error for SendError<T> {}

/// Error of a non-blocking send. Either way the value is handed back.
pub enum TrySendError<T> {
    /// The channel was full (or its lock contended); try again later.
    WouldBlock(T),
    /// The channel is closed.
    Closed(T),
}

impl<T> TrySendError<T> {
    /// Recovers the value that could not be sent.
    pub fn into_inner(self) -> T {
        match self {
            TrySendError::WouldBlock(item) | TrySendError::Closed(item) => item,
        }
    }

    pub fn is_would_block(&self) -> bool {
        matches!(self, TrySendError::WouldBlock(_))
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, TrySendError::Closed(_))
    }
}

impl<T> fmt::Debug for TrySendError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrySendError::WouldBlock(_) => f.debug_tuple("WouldBlock").field(&"..").finish(),
            TrySendError::Closed(_) => f.debug_tuple("Closed").field(&"..").finish(),
        }
    }
}

impl<T> fmt::Display for TrySendError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrySendError::WouldBlock(_) => f.write_str("operation would block, try again later"),
            TrySendError::Closed(_) => f.write_str("channel is closed"),
        }
    }
}

impl<T> Error for TrySendError<T> {}

/// Error of a blocking receive: the channel is closed and holds nothing
/// more. End-of-stream for consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drained;

impl fmt::Display for Drained {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("channel is closed and drained")
    }
}

impl Error for Drained {}

/// Error of a non-blocking or timed receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TryReceiveError {
    /// Nothing available yet (or the lock was contended); try again later.
    WouldBlock,
    /// The channel is closed and holds nothing more.
    Drained,
}

impl fmt::Display for TryReceiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TryReceiveError::WouldBlock => f.write_str("operation would block, try again later"),
            TryReceiveError::Drained => f.write_str("channel is closed and drained"),
        }
    }
}

impl Error for TryReceiveError {}
