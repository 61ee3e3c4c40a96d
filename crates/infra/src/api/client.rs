//! API client with bearer auth, deadlines, and error normalization
//!
//! Every verb goes through one pipeline: resolve the URL, attach the bearer
//! token (when the provider has one), apply the hardened profile if
//! configured, then race send-and-read against the per-call deadline. Any
//! failure leaves as an [`ApiError`]; raw transport errors never escape.

use std::sync::Arc;
use std::time::Duration;

use portalkit_common::{request_id, with_timeout, TimeoutError};
use portalkit_core::{detect_service, AccessTokenProvider};
use portalkit_domain::constants::DEFAULT_TIMEOUT_MS;
use portalkit_domain::{
    ApiError, ApiResponse, Failure, PaginatedResponse, PortalError, RequestConfig,
};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, instrument};

use super::profile::HardenedProfile;
use crate::errors::transport_failure;
use crate::http::HttpClient;

/// Configuration for API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Origin plus module base path (e.g., "https://api.example.com/account-svc/v1")
    pub base_url: String,
    /// Deadline used when a call does not override it
    pub timeout: Duration,
    /// Hardened profile; `None` selects the base profile
    pub hardened: Option<HardenedProfile>,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            hardened: None,
        }
    }
}

/// Status, headers, and body of a response read within the deadline.
struct RawResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

/// API client shared by the domain modules
#[derive(Clone)]
pub struct ApiClient {
    http_client: Arc<HttpClient>,
    auth: Arc<dyn AccessTokenProvider>,
    config: ApiClientConfig,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Errors
    ///
    /// Returns error if the underlying HTTP client cannot be created
    pub fn new(
        config: ApiClientConfig,
        auth: Arc<dyn AccessTokenProvider>,
    ) -> Result<Self, PortalError> {
        let http_client = HttpClient::builder().build()?;
        Ok(Self::with_http_client(config, auth, Arc::new(http_client)))
    }

    /// Create a client reusing an existing transport
    pub fn with_http_client(
        config: ApiClientConfig,
        auth: Arc<dyn AccessTokenProvider>,
        http_client: Arc<HttpClient>,
    ) -> Self {
        Self { http_client, auth, config }
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// A client for a sub-resource, sharing transport, auth, and profile.
    #[must_use]
    pub fn scoped(&self, base_path: &str) -> Self {
        let mut config = self.config.clone();
        config.base_url = join_url(&self.config.base_url, base_path);
        Self { http_client: Arc::clone(&self.http_client), auth: Arc::clone(&self.auth), config }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub const fn is_hardened(&self) -> bool {
        self.config.hardened.is_some()
    }

    /// Execute a GET request
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        config: &RequestConfig,
    ) -> Result<ApiResponse<T>, ApiError> {
        self.execute(Method::GET, endpoint, None::<&()>, config).await
    }

    /// Execute a GET request against a paginated list endpoint
    pub async fn get_paginated<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        config: &RequestConfig,
    ) -> Result<PaginatedResponse<T>, ApiError> {
        self.execute(Method::GET, endpoint, None::<&()>, config).await
    }

    /// Execute a POST request
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: Option<&B>,
        config: &RequestConfig,
    ) -> Result<ApiResponse<T>, ApiError> {
        self.execute(Method::POST, endpoint, body, config).await
    }

    /// Execute a PUT request
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: Option<&B>,
        config: &RequestConfig,
    ) -> Result<ApiResponse<T>, ApiError> {
        self.execute(Method::PUT, endpoint, body, config).await
    }

    /// Execute a PATCH request
    pub async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: Option<&B>,
        config: &RequestConfig,
    ) -> Result<ApiResponse<T>, ApiError> {
        self.execute(Method::PATCH, endpoint, body, config).await
    }

    /// Execute a DELETE request
    pub async fn delete<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        config: &RequestConfig,
    ) -> Result<ApiResponse<T>, ApiError> {
        self.execute(Method::DELETE, endpoint, None::<&()>, config).await
    }

    /// Send one request and decode the body into `R`.
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] for timeouts, transport failures,
    /// non-success statuses, and undecodable bodies
    #[instrument(skip_all, fields(method = %method, endpoint = %endpoint))]
    pub async fn execute<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
        config: &RequestConfig,
    ) -> Result<R, ApiError> {
        let url = join_url(&self.config.base_url, endpoint);
        let request_id = self.config.hardened.as_ref().map(|_| request_id());
        let deadline = config.effective_timeout(self.config.timeout);

        let serialized = match body.map(serde_json::to_string).transpose() {
            Ok(serialized) => serialized,
            Err(e) => {
                let failure = Failure::decode(format!("Failed to serialize body: {e}"));
                return Err(self.normalize(failure, &url, request_id.as_deref()));
            }
        };

        let mut builder =
            self.http_client.request(method.clone(), &url).header(CONTENT_TYPE, "application/json");

        if let Some(token) = self.auth.access_token().await {
            builder = builder.bearer_auth(token);
        }
        if let (Some(profile), Some(id)) = (&self.config.hardened, &request_id) {
            builder = profile.decorate(builder, &method, id, serialized.as_deref());
        }
        match per_call_headers(&config.headers) {
            Ok(overrides) => builder = builder.headers(overrides),
            Err(failure) => return Err(self.normalize(failure, &url, request_id.as_deref())),
        }
        if let Some(json) = serialized {
            builder = builder.body(json);
        }

        debug!(%url, request_id = ?request_id, deadline_ms = deadline.as_millis(), "API request");

        let client = Arc::clone(&self.http_client);
        let exchange = async move {
            let response = client.send(builder).await?;
            let status = response.status();
            let headers = response.headers().clone();
            let body = response.bytes().await?.to_vec();
            Ok::<_, reqwest::Error>(RawResponse { status, headers, body })
        };

        let raw = match with_timeout(exchange, deadline).await {
            Ok(raw) => raw,
            Err(TimeoutError::Elapsed { message, .. }) => {
                return Err(self.fail(Failure::timeout(message), &url, request_id.as_deref()));
            }
            Err(TimeoutError::Failed(err)) => {
                return Err(self.fail(transport_failure(&err), &url, request_id.as_deref()));
            }
        };

        if let Some(profile) = &self.config.hardened {
            profile.check_response_headers(&url, &raw.headers);
        }

        if !raw.status.is_success() {
            return Err(self.status_error(&raw, &url, request_id.as_deref()));
        }

        debug!(%url, status = raw.status.as_u16(), "API request successful");
        decode_body(&raw).map_err(|failure| self.fail(failure, &url, request_id.as_deref()))
    }

    fn status_error(&self, raw: &RawResponse, url: &str, request_id: Option<&str>) -> ApiError {
        let details: Option<Value> = serde_json::from_slice(&raw.body).ok();
        let field = |name: &str| {
            details
                .as_ref()
                .and_then(|d| d.get(name))
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        let failure = Failure::Http {
            status: raw.status.as_u16(),
            code: field("code"),
            message: field("message"),
            service: detect_service(url),
        };

        let mut err = self.normalize(failure, url, request_id);
        if let Some(details) = details {
            err = err.with_details(details);
        }
        self.report(&err);
        err
    }

    /// Normalize and, for the hardened profile, report.
    fn fail(&self, failure: Failure, url: &str, request_id: Option<&str>) -> ApiError {
        let err = self.normalize(failure, url, request_id);
        self.report(&err);
        err
    }

    fn normalize(&self, failure: Failure, url: &str, request_id: Option<&str>) -> ApiError {
        let mut err = ApiError::from_failure(failure).with_url(url);
        if self.config.hardened.is_some() {
            err = err.with_timestamp(chrono::Utc::now().to_rfc3339());
            if let Some(id) = request_id {
                err = err.with_request_id(id);
            }
        }
        debug!(%url, message = %err.message, status = ?err.status, "API request failed");
        err
    }

    fn report(&self, err: &ApiError) {
        if let Some(profile) = &self.config.hardened {
            profile.report_if_critical(err);
        }
    }
}

/// Decode a success body.
///
/// An empty 2xx body (204, 205, or blank) decodes as the envelope
/// `{ data: null, success: true, status }`.
fn decode_body<R: DeserializeOwned>(raw: &RawResponse) -> Result<R, Failure> {
    let no_content = raw.status == StatusCode::NO_CONTENT
        || raw.status == StatusCode::RESET_CONTENT
        || raw.body.iter().all(u8::is_ascii_whitespace);

    let decoded = if no_content {
        serde_json::from_value(json!({
            "data": null,
            "success": true,
            "status": raw.status.as_u16(),
        }))
    } else {
        serde_json::from_slice(&raw.body)
    };

    decoded.map_err(|e| Failure::decode(format!("Failed to parse response: {e}")))
}

/// Per-call headers as a map that replaces same-named defaults when merged.
fn per_call_headers(headers: &[(String, String)]) -> Result<HeaderMap, Failure> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| Failure::validation(format!("Invalid header name '{name}': {e}")))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|e| Failure::validation(format!("Invalid value for header '{name}': {e}")))?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

/// Join a base URL and a path without doubling or dropping the slash.
fn join_url(base: &str, path: &str) -> String {
    if path.is_empty() {
        return base.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Builder for API client
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ApiClientConfig>,
    auth: Option<Arc<dyn AccessTokenProvider>>,
    http_client: Option<Arc<HttpClient>>,
}

impl ApiClientBuilder {
    /// Set the API configuration
    pub fn config(mut self, config: ApiClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the token provider
    pub fn auth(mut self, auth: Arc<dyn AccessTokenProvider>) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Reuse an existing transport
    pub fn http_client(mut self, http_client: Arc<HttpClient>) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Build the API client
    ///
    /// # Errors
    ///
    /// Returns error if the token provider is missing or client creation fails
    pub fn build(self) -> Result<ApiClient, PortalError> {
        let config = self.config.unwrap_or_default();
        let auth = self
            .auth
            .ok_or_else(|| PortalError::Config("Token provider not set".to_string()))?;

        match self.http_client {
            Some(http_client) => Ok(ApiClient::with_http_client(config, auth, http_client)),
            None => ApiClient::new(config, auth),
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use portalkit_domain::constants::headers;
    use portalkit_domain::{EmptyResponse, Service};
    use serde_json::json;
    use wiremock::matchers::{header, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    struct MockAuthProvider {
        token: Option<String>,
    }

    #[async_trait]
    impl AccessTokenProvider for MockAuthProvider {
        async fn access_token(&self) -> Option<String> {
            self.token.clone()
        }
    }

    fn client(base_url: String, token: Option<&str>, hardened: Option<HardenedProfile>) -> ApiClient {
        ApiClient::builder()
            .config(ApiClientConfig { base_url, timeout: Duration::from_secs(2), hardened })
            .auth(Arc::new(MockAuthProvider { token: token.map(str::to_string) }))
            .build()
            .expect("api client")
    }

    #[test]
    fn join_url_normalizes_slashes() {
        assert_eq!(join_url("http://h/", "/a"), "http://h/a");
        assert_eq!(join_url("http://h", "a"), "http://h/a");
        assert_eq!(join_url("http://h/base", ""), "http://h/base");
        assert_eq!(join_url("http://h/new-feat", "/?page=1"), "http://h/new-feat/?page=1");
    }

    #[test]
    fn builder_requires_token_provider() {
        let result = ApiClient::builder().build();
        assert!(matches!(result, Err(PortalError::Config(_))));
    }

    #[tokio::test]
    async fn get_returns_envelope_and_sends_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/items/1"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "id": 1 },
                "success": true,
                "status": 200
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(server.uri(), Some("test-token"), None);
        let response: ApiResponse<Value> =
            client.get("/items/1", &RequestConfig::new()).await.expect("response");

        assert!(response.success);
        assert_eq!(response.data["id"], 1);
    }

    #[tokio::test]
    async fn omits_authorization_without_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": null, "success": true, "status": 200
            })))
            .mount(&server)
            .await;

        let client = client(server.uri(), None, None);
        let _: EmptyResponse = client.get("/", &RequestConfig::new()).await.expect("response");

        let requests = server.received_requests().await.expect("recorded");
        assert!(!requests[0].headers.contains_key("authorization"));
    }

    #[tokio::test]
    async fn status_error_uses_backend_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(409).set_body_json(json!({
                "message": "Email đã được sử dụng",
                "code": "EMAIL_TAKEN"
            })))
            .mount(&server)
            .await;

        let client = client(format!("{}/account-svc/v1", server.uri()), None, None);
        let err = client
            .post::<_, Value>("/users/register", Some(&json!({"email": "a@b.co"})), &RequestConfig::new())
            .await
            .expect_err("conflict");

        assert_eq!(err.message, "Email đã được sử dụng");
        assert_eq!(err.code.as_deref(), Some("EMAIL_TAKEN"));
        assert_eq!(err.status, Some(409));
        assert_eq!(err.service, Service::Account);
        assert!(err.url.as_deref().is_some_and(|u| u.ends_with("/account-svc/v1/users/register")));
        assert!(err.details.is_some());
        // base profile does not stamp request ids
        assert_eq!(err.request_id, None);
    }

    #[tokio::test]
    async fn status_error_without_body_gets_generic_message() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client(server.uri(), None, None);
        let err = client.delete::<Value>("/x", &RequestConfig::new()).await.expect_err("500");

        assert_eq!(err.message, "Request failed with status code 500");
        assert_eq!(err.details, None);
        assert!(err.is_critical());
    }

    #[tokio::test]
    async fn per_call_timeout_overrides_default() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let client = client(server.uri(), None, None);
        let config = RequestConfig::new().with_timeout(Duration::from_millis(50));
        let err = client.get::<Value>("/slow", &config).await.expect_err("timeout");

        assert_eq!(err.failure, Failure::timeout(portalkit_common::time::TIMEOUT_MESSAGE));
        assert_eq!(err.message, portalkit_common::time::TIMEOUT_MESSAGE);
        assert_eq!(err.status, None);
    }

    #[tokio::test]
    async fn undecodable_success_body_is_decode_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = client(server.uri(), None, None);
        let err = client.get::<Value>("/", &RequestConfig::new()).await.expect_err("decode");
        assert!(matches!(err.failure, Failure::Decode { .. }));
    }

    #[tokio::test]
    async fn hardened_profile_adds_headers_and_hash() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(header_exists("x-request-id"))
            .and(header_exists("x-request-time"))
            .and(header("x-client-version", "1.0.0"))
            .and(header("x-platform", "web"))
            .and(header("x-frame-options", "DENY"))
            .and(header("x-content-type-options", "nosniff"))
            .and(header("x-csrf-token", "csrf-1"))
            .and(header("x-content-hash", "eyJhIjoxfQ=="))
            .and(header("x-extra", "yes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": null, "success": true, "status": 200
            })))
            .expect(1)
            .mount(&server)
            .await;

        let profile = HardenedProfile::default().with_csrf_token("csrf-1");
        let client = client(server.uri(), None, Some(profile));
        let config = RequestConfig::new().with_header("X-Extra", "yes");
        let _: EmptyResponse =
            client.put("/a", Some(&json!({"a": 1})), &config).await.expect("response");

        let requests = server.received_requests().await.expect("recorded");
        let id = requests[0].headers.get(headers::REQUEST_ID).expect("id");
        assert!(id.to_str().expect("ascii").starts_with("req_"));
    }

    #[tokio::test]
    async fn hardened_get_has_no_content_hash() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": null, "success": true, "status": 200
            })))
            .mount(&server)
            .await;

        let client = client(server.uri(), None, Some(HardenedProfile::default()));
        let _: EmptyResponse = client.get("/", &RequestConfig::new()).await.expect("response");

        let requests = server.received_requests().await.expect("recorded");
        assert!(!requests[0].headers.contains_key("x-content-hash"));
        assert!(!requests[0].headers.contains_key("x-csrf-token"));
    }

    #[tokio::test]
    async fn scoped_client_appends_base_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/new-feat/active"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [], "success": true, "status": 200
            })))
            .expect(1)
            .mount(&server)
            .await;

        let root = client(server.uri(), None, None);
        let features = root.scoped("/new-feat");
        let response: ApiResponse<Vec<Value>> =
            features.get("/active", &RequestConfig::new()).await.expect("response");
        assert!(response.data.is_empty());
    }

    #[tokio::test]
    async fn per_call_header_replaces_default_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": null, "success": true, "status": 200
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(server.uri(), Some("stored-token"), None);
        let config = RequestConfig::new()
            .with_header("Content-Type", "application/merge-patch+json")
            .with_header("Authorization", "Bearer override-token");
        let _: EmptyResponse =
            client.patch("/items/1", Some(&json!({"name": "x"})), &config).await.expect("response");

        let requests = server.received_requests().await.expect("recorded");
        let content_types: Vec<_> = requests[0].headers.get_all("content-type").iter().collect();
        assert_eq!(content_types.len(), 1);
        assert_eq!(content_types[0], "application/merge-patch+json");

        let auth: Vec<_> = requests[0].headers.get_all("authorization").iter().collect();
        assert_eq!(auth.len(), 1);
        assert_eq!(auth[0], "Bearer override-token");
    }

    #[tokio::test]
    async fn invalid_per_call_header_is_validation_failure() {
        let server = MockServer::start().await;
        let client = client(server.uri(), None, None);
        let config = RequestConfig::new().with_header("bad header", "x");

        let err = client.get::<Value>("/", &config).await.expect_err("invalid header");
        assert!(matches!(err.failure, Failure::Validation { .. }));
        assert!(server.received_requests().await.unwrap_or_default().is_empty());
    }

    #[tokio::test]
    async fn no_content_delete_decodes_as_empty_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/items/1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(server.uri(), None, None);
        let response: EmptyResponse =
            client.delete("/items/1", &RequestConfig::new()).await.expect("204 should succeed");

        assert!(response.success);
        assert_eq!(response.status, 204);
        assert!(response.data.is_none());
    }

    #[tokio::test]
    async fn blank_success_body_decodes_as_empty_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("  "))
            .mount(&server)
            .await;

        let client = client(server.uri(), None, None);
        let response: EmptyResponse =
            client.post("/items", Some(&json!({})), &RequestConfig::new()).await.expect("response");
        assert!(response.success);
        assert_eq!(response.status, 200);
    }
}
