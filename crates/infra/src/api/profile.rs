//! Hardened client profile
//!
//! Adds identification headers to every request, an integrity hint to
//! mutating bodies, inspects responses for missing security headers, and
//! routes critical failures to a [`CriticalErrorReporter`].

use std::fmt;
use std::sync::Arc;

use portalkit_common::content_hash;
use portalkit_core::CriticalErrorReporter;
use portalkit_domain::constants::{headers, CLIENT_VERSION, PLATFORM};
use portalkit_domain::{ApiError, SecurityConfig};
use reqwest::header::HeaderMap;
use reqwest::{Method, RequestBuilder};
use tracing::{debug, warn};

use super::reporter::TracingReporter;

/// Settings for the hardened profile.
#[derive(Clone)]
pub struct HardenedProfile {
    pub client_version: String,
    pub platform: String,
    pub csrf_token: Option<String>,
    /// Attach `X-Content-Hash` to POST/PUT bodies
    pub content_hash: bool,
    reporter: Arc<dyn CriticalErrorReporter>,
}

impl fmt::Debug for HardenedProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HardenedProfile")
            .field("client_version", &self.client_version)
            .field("platform", &self.platform)
            .field("csrf_token", &self.csrf_token.as_ref().map(|_| "<redacted>"))
            .field("content_hash", &self.content_hash)
            .finish_non_exhaustive()
    }
}

impl Default for HardenedProfile {
    fn default() -> Self {
        Self {
            client_version: CLIENT_VERSION.to_string(),
            platform: PLATFORM.to_string(),
            csrf_token: None,
            content_hash: true,
            reporter: Arc::new(TracingReporter),
        }
    }
}

impl HardenedProfile {
    /// Profile built from configuration, reporting through tracing.
    pub fn from_config(
        security: &SecurityConfig,
        client_version: impl Into<String>,
        platform: impl Into<String>,
    ) -> Self {
        Self {
            client_version: client_version.into(),
            platform: platform.into(),
            csrf_token: security.csrf_token.clone(),
            content_hash: security.content_hash,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_reporter(mut self, reporter: Arc<dyn CriticalErrorReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    #[must_use]
    pub fn with_csrf_token(mut self, token: impl Into<String>) -> Self {
        self.csrf_token = Some(token.into());
        self
    }

    /// Attach identification and security headers.
    ///
    /// `serialized_body` is the JSON body exactly as it will be sent.
    pub(crate) fn decorate(
        &self,
        mut builder: RequestBuilder,
        method: &Method,
        request_id: &str,
        serialized_body: Option<&str>,
    ) -> RequestBuilder {
        builder = builder
            .header(headers::REQUEST_ID, request_id)
            .header(headers::CLIENT_VERSION, &self.client_version)
            .header(headers::PLATFORM, &self.platform)
            .header(headers::REQUEST_TIME, chrono::Utc::now().timestamp_millis().to_string())
            .header(headers::FRAME_OPTIONS, "DENY")
            .header(headers::CONTENT_TYPE_OPTIONS, "nosniff");

        if let Some(token) = &self.csrf_token {
            builder = builder.header(headers::CSRF_TOKEN, token);
        }

        let mutating = *method == Method::POST || *method == Method::PUT;
        if let (true, true, Some(body)) = (self.content_hash, mutating, serialized_body) {
            builder = builder.header(headers::CONTENT_HASH, content_hash(body));
        }

        builder
    }

    /// Warn about responses missing the expected security headers.
    pub(crate) fn check_response_headers(&self, url: &str, response_headers: &HeaderMap) {
        for name in [headers::CONTENT_TYPE_OPTIONS, headers::FRAME_OPTIONS] {
            if !response_headers.contains_key(name) {
                warn!(%url, header = name, "response is missing security header");
            }
        }
    }

    /// Route a critical failure to the reporter; ordinary failures are ignored.
    pub(crate) fn report_if_critical(&self, err: &ApiError) {
        if err.is_critical() {
            debug!(
                status = ?err.status,
                code = ?err.code,
                service = %err.service,
                request_id = ?err.request_id,
                "routing critical API error to reporter"
            );
            self.reporter.report(err);
        }
    }
}
