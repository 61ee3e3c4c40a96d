//! Error classifier
//!
//! Turns a [`Failure`] into the one human-readable string shown to users and
//! a coarse [`ErrorType`]. Both are exhaustive matches over the failure
//! variants, so a new variant cannot be added without deciding how it is
//! presented.

use portalkit_domain::constants::UNKNOWN_ERROR_MESSAGE;
use portalkit_domain::{ApiError, ErrorType, Failure};

use super::messages::status_message;

/// User-facing message for `failure`.
///
/// A backend-supplied message wins. HTTP failures without one are looked up
/// by service and status; other failures carry their own message.
pub fn error_message(failure: &Failure) -> String {
    let message = match failure {
        Failure::Http { message: Some(message), .. } if !message.trim().is_empty() => {
            message.as_str()
        }
        Failure::Http { status, service, .. } => status_message(*service, *status),
        Failure::Network { message }
        | Failure::Timeout { message }
        | Failure::Decode { message }
        | Failure::Validation { message } => message.as_str(),
    };

    if message.trim().is_empty() {
        UNKNOWN_ERROR_MESSAGE.to_string()
    } else {
        message.to_string()
    }
}

/// User-facing message for an error returned by the HTTP client.
pub fn api_error_message(error: &ApiError) -> String {
    error_message(&error.failure)
}

/// No response was received.
pub const fn is_network_error(failure: &Failure) -> bool {
    matches!(failure, Failure::Network { .. })
}

/// The deadline elapsed, or the failure message mentions a timeout.
pub fn is_timeout_error(failure: &Failure) -> bool {
    match failure {
        Failure::Timeout { .. } => true,
        Failure::Http { .. } | Failure::Network { .. } => {
            failure.message().is_some_and(|m| m.contains("timeout"))
        }
        Failure::Decode { .. } | Failure::Validation { .. } => false,
    }
}

/// Coarse classification; network and timeout take priority over status.
pub fn error_type(failure: &Failure) -> ErrorType {
    if is_network_error(failure) && !is_timeout_error(failure) {
        return ErrorType::Network;
    }
    if is_timeout_error(failure) {
        return ErrorType::Timeout;
    }
    match failure.status() {
        Some(status) if status >= 500 => ErrorType::Server,
        Some(status) if status >= 400 => ErrorType::Client,
        _ => ErrorType::Unknown,
    }
}
