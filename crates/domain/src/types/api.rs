//! Response envelopes, per-call request options, and the normalized API error

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::failure::{Failure, Service};
use crate::constants::{CRITICAL_ERROR_CODES, GENERIC_ERROR_MESSAGE};

/// Envelope returned by every backend call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub success: bool,
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Envelope for endpoints that return no meaningful payload.
pub type EmptyResponse = ApiResponse<Option<serde_json::Value>>;

/// Paging metadata attached to list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

/// Envelope for paginated list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub success: bool,
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub pagination: Pagination,
}

/// Per-call overrides for a single request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestConfig {
    /// Deadline override; `None` or zero falls back to the module default
    pub timeout: Option<Duration>,
    /// Extra headers appended to the request
    pub headers: Vec<(String, String)>,
}

impl RequestConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Deadline to apply given the owning module's default.
    #[must_use]
    pub fn effective_timeout(&self, default: Duration) -> Duration {
        self.timeout.filter(|t| !t.is_zero()).unwrap_or(default)
    }
}

/// The single failure shape surfaced to callers of the HTTP client.
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct ApiError {
    /// Never empty
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Raw response body, when one was received
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    pub service: Service,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// RFC 3339 instant the error was observed (hardened profile only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Tagged origin of this error
    #[serde(skip)]
    pub failure: Failure,
}

impl ApiError {
    /// Normalize a transport-boundary failure.
    ///
    /// The message is the backend message when present, otherwise a
    /// transport-level description, otherwise a generic fallback.
    #[must_use]
    pub fn from_failure(failure: Failure) -> Self {
        let message = match &failure {
            Failure::Http { message: Some(m), .. } if !m.trim().is_empty() => m.clone(),
            Failure::Http { status, .. } => format!("Request failed with status code {status}"),
            other => other.message().unwrap_or_default().to_string(),
        };
        let message =
            if message.trim().is_empty() { GENERIC_ERROR_MESSAGE.to_string() } else { message };

        Self {
            message,
            code: failure.code().map(str::to_string),
            status: failure.status(),
            details: None,
            service: failure.service(),
            url: None,
            request_id: None,
            timestamp: None,
            failure,
        }
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Auth and server failures that warrant the critical-error hook.
    #[must_use]
    pub fn is_critical(&self) -> bool {
        let critical_code =
            self.code.as_deref().is_some_and(|code| CRITICAL_ERROR_CODES.contains(&code));
        critical_code || self.status.is_some_and(|status| status >= 500)
    }
}

impl From<Failure> for ApiError {
    fn from(failure: Failure) -> Self {
        Self::from_failure(failure)
    }
}
