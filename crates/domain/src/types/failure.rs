//! Tagged failure taxonomy
//!
//! Every failure produced at the transport boundary is one of the
//! [`Failure`] variants. Classification (user-facing message, error type)
//! is an exhaustive match over these variants.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::impl_tag_conversions;

/// Logical backend service a request was addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    Account,
    Payment,
    Notification,
    User,
    #[default]
    Unknown,
}

impl_tag_conversions!(Service {
    Account => "account",
    Payment => "payment",
    Notification => "notification",
    User => "user",
    Unknown => "unknown",
});

/// Coarse failure classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorType {
    Network,
    Timeout,
    Server,
    Client,
    Unknown,
}

impl_tag_conversions!(ErrorType {
    Network => "network",
    Timeout => "timeout",
    Server => "server",
    Client => "client",
    Unknown => "unknown",
});

/// A failure as observed at the transport boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    /// No response was received (connection refused, DNS, reset, ...)
    #[error("{message}")]
    Network { message: String },

    /// The deadline elapsed or the transport aborted on its own timeout
    #[error("{message}")]
    Timeout { message: String },

    /// The backend answered with a non-success status
    #[error("HTTP {status} from {service} service")]
    Http {
        status: u16,
        /// Backend-supplied machine code
        code: Option<String>,
        /// Backend-supplied message
        message: Option<String>,
        service: Service,
    },

    /// A body or stored value could not be decoded
    #[error("{message}")]
    Decode { message: String },

    /// Caller-side validation rejected the input before any request was made
    #[error("{message}")]
    Validation { message: String },
}

impl Failure {
    /// Transport failure with no HTTP response.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network { message: message.into() }
    }

    /// Deadline elapsed before a response arrived.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout { message: message.into() }
    }

    /// Body could not be serialized or parsed.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode { message: message.into() }
    }

    /// Caller-side input rejected before sending.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation { message: message.into() }
    }

    /// HTTP status, when the backend answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Backend-supplied machine code, when present.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Http { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// The message carried by the failure itself, if any.
    ///
    /// For HTTP failures this is only the backend-supplied message.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Network { message }
            | Self::Timeout { message }
            | Self::Decode { message }
            | Self::Validation { message } => Some(message.as_str()),
            Self::Http { message, .. } => message.as_deref(),
        }
    }

    /// Originating service for HTTP failures, `Unknown` otherwise.
    #[must_use]
    pub const fn service(&self) -> Service {
        match self {
            Self::Http { service, .. } => *service,
            _ => Service::Unknown,
        }
    }
}
