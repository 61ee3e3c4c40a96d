//! Application constants
//!
//! Centralized location for wire names, storage keys, and default values.

// Timeouts
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;
pub const SECURE_TIMEOUT_MS: u64 = 10_000;

// Client identity
pub const CLIENT_VERSION: &str = "1.0.0";
pub const PLATFORM: &str = "web";
pub const DEFAULT_TOKEN_TYPE: &str = "Bearer";

// Session storage keys
pub const TOKEN_STORAGE_KEY: &str = "secure_auth_data";
pub const REFRESH_STORAGE_KEY: &str = "secure_refresh_data";
pub const PLAIN_ACCESS_TOKEN_KEY: &str = "auth_token";
pub const PLAIN_REFRESH_TOKEN_KEY: &str = "refresh_token";

// Messages
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";
pub const UNKNOWN_ERROR_MESSAGE: &str = "Đã xảy ra lỗi không xác định";

// Domain module base paths
pub const AUTH_BASE_PATH: &str = "/account-svc/v1";
pub const FEATURE_BASE_PATH: &str = "/new-feat";

/// Backend error codes that route an error through the critical-error hook.
pub const CRITICAL_ERROR_CODES: &[&str] =
    &["UNAUTHORIZED", "FORBIDDEN", "INTERNAL_SERVER_ERROR", "SERVICE_UNAVAILABLE"];

/// Outbound header names used by the hardened client profile.
pub mod headers {
    pub const REQUEST_ID: &str = "X-Request-ID";
    pub const CLIENT_VERSION: &str = "X-Client-Version";
    pub const PLATFORM: &str = "X-Platform";
    pub const CSRF_TOKEN: &str = "X-CSRF-Token";
    pub const REQUEST_TIME: &str = "X-Request-Time";
    pub const CONTENT_HASH: &str = "X-Content-Hash";
    pub const FRAME_OPTIONS: &str = "X-Frame-Options";
    pub const CONTENT_TYPE_OPTIONS: &str = "X-Content-Type-Options";
}
