//! Deadline enforcement for fallible async operations.
//!
//! The wrapper races an operation against a timer. Whichever finishes first
//! wins; the losing future is dropped, which abandons any in-flight request
//! it owned. Errors the operation reports as timeouts of its own (see
//! [`TimeoutSignal`]) are folded into the same [`TimeoutError::Elapsed`]
//! outcome so callers see one timeout shape regardless of the source.

use std::convert::Infallible;
use std::fmt;
use std::future::Future;
use std::time::Duration;

use tracing::debug;

/// Deadline applied when callers do not pass one.
pub const DEFAULT_DEADLINE: Duration = Duration::from_millis(5_000);

/// User-facing message carried by [`TimeoutError::Elapsed`].
pub const TIMEOUT_MESSAGE: &str = "Request timeout - please check your connection and try again";

/// Errors that can report "I was an abort or transport timeout".
pub trait TimeoutSignal {
    /// True when the error came from an elapsed deadline.
    fn is_timeout(&self) -> bool;
}

impl TimeoutSignal for reqwest::Error {
    fn is_timeout(&self) -> bool {
        reqwest::Error::is_timeout(self)
    }
}

impl TimeoutSignal for std::io::Error {
    fn is_timeout(&self) -> bool {
        self.kind() == std::io::ErrorKind::TimedOut
    }
}

impl TimeoutSignal for tokio::time::error::Elapsed {
    fn is_timeout(&self) -> bool {
        true
    }
}

impl TimeoutSignal for Infallible {
    fn is_timeout(&self) -> bool {
        match *self {}
    }
}

/// Outcome of a deadline-bounded operation that did not succeed.
#[derive(Debug)]
pub enum TimeoutError<E> {
    /// The deadline passed, or the operation reported its own timeout.
    Elapsed { deadline: Duration, message: String },
    /// The operation failed for an unrelated reason.
    Failed(E),
}

impl<E> TimeoutError<E> {
    pub fn is_elapsed(&self) -> bool {
        matches!(self, Self::Elapsed { .. })
    }

    /// The operation's own error, if the failure was not a timeout.
    pub fn into_inner(self) -> Option<E> {
        match self {
            Self::Elapsed { .. } => None,
            Self::Failed(err) => Some(err),
        }
    }
}

impl<E: fmt::Display> fmt::Display for TimeoutError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Elapsed { message, .. } => f.write_str(message),
            Self::Failed(err) => err.fmt(f),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for TimeoutError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Elapsed { .. } => None,
            Self::Failed(err) => Some(err),
        }
    }
}

/// Run `operation` with a deadline and the default timeout message.
pub async fn with_timeout<F, T, E>(operation: F, deadline: Duration) -> Result<T, TimeoutError<E>>
where
    F: Future<Output = Result<T, E>>,
    E: TimeoutSignal,
{
    with_timeout_message(operation, deadline, TIMEOUT_MESSAGE).await
}

/// Run `operation` with a deadline, reporting `message` when it elapses.
pub async fn with_timeout_message<F, T, E>(
    operation: F,
    deadline: Duration,
    message: &str,
) -> Result<T, TimeoutError<E>>
where
    F: Future<Output = Result<T, E>>,
    E: TimeoutSignal,
{
    match tokio::time::timeout(deadline, operation).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) if err.is_timeout() => {
            debug!(deadline_ms = deadline.as_millis(), "operation reported its own timeout");
            Err(TimeoutError::Elapsed { deadline, message: message.to_string() })
        }
        Ok(Err(err)) => Err(TimeoutError::Failed(err)),
        Err(_) => {
            debug!(deadline_ms = deadline.as_millis(), "deadline elapsed, abandoning operation");
            Err(TimeoutError::Elapsed { deadline, message: message.to_string() })
        }
    }
}

/// Reusable deadline configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deadline {
    duration: Duration,
    message: String,
}

impl Default for Deadline {
    fn default() -> Self {
        Self::new(DEFAULT_DEADLINE)
    }
}

impl Deadline {
    pub fn new(duration: Duration) -> Self {
        Self { duration, message: TIMEOUT_MESSAGE.to_string() }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub const fn duration(&self) -> Duration {
        self.duration
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Run the future produced by `operation` under this deadline.
    pub async fn run<F, Fut, T, E>(&self, operation: F) -> Result<T, TimeoutError<E>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: TimeoutSignal,
    {
        with_timeout_message(operation(), self.duration, &self.message).await
    }
}
