//! Configuration structures

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{CLIENT_VERSION, DEFAULT_TIMEOUT_MS, PLATFORM, SECURE_TIMEOUT_MS};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub security: SecurityConfig,
    pub logging: LoggingConfig,
}

/// Backend connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Origin every domain module's base path is appended to
    pub base_url: String,
    pub timeout_ms: u64,
    pub client_version: String,
    pub platform: String,
}

impl ApiConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            client_version: CLIENT_VERSION.to_string(),
            platform: PLATFORM.to_string(),
        }
    }
}

/// Hardened client profile settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Use the hardened profile (identification headers, critical-error hook)
    pub hardened: bool,
    /// Default deadline for the hardened profile
    pub timeout_ms: u64,
    #[serde(skip_serializing)]
    pub csrf_token: Option<String>,
    /// Attach the `X-Content-Hash` hint to POST/PUT bodies
    pub content_hash: bool,
}

impl SecurityConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self { hardened: false, timeout_ms: SECURE_TIMEOUT_MS, csrf_token: None, content_hash: true }
    }
}

/// Tracing output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset
    pub level: String,
    /// Emit JSON lines instead of compact text
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), json: false }
    }
}
