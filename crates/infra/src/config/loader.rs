//! Configuration loader
//!
//! ## Loading Strategy
//! 1. Seed the process environment from a `.env` file, if one exists
//! 2. Build the configuration from `PORTALKIT_*` variables
//! 3. If `PORTALKIT_API_BASE_URL` is unset, fall back to a config file
//!
//! ## Environment Variables
//! - `PORTALKIT_API_BASE_URL` (required): backend origin
//! - `PORTALKIT_API_TIMEOUT_MS`: base profile deadline
//! - `PORTALKIT_CLIENT_VERSION`, `PORTALKIT_PLATFORM`: identification headers
//! - `PORTALKIT_SECURE_MODE`: select the hardened profile (true/false)
//! - `PORTALKIT_SECURE_TIMEOUT_MS`: hardened profile deadline
//! - `PORTALKIT_CSRF_TOKEN`: value for `X-CSRF-Token`
//! - `PORTALKIT_CONTENT_HASH`: attach `X-Content-Hash` (true/false)
//! - `PORTALKIT_LOG_LEVEL`, `PORTALKIT_LOG_JSON`: tracing output
//!
//! ## File Locations
//! `config.{json,toml}` and `portalkit.{json,toml}` are probed in the working
//! directory, its two parents, and the same places relative to the
//! executable. The first existing file wins.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use portalkit_domain::{ApiConfig, Config, LoggingConfig, PortalError, Result, SecurityConfig};

const CONFIG_FILE_NAMES: [&str; 4] =
    ["config.json", "config.toml", "portalkit.json", "portalkit.toml"];

/// Load configuration, preferring the environment over files.
///
/// # Errors
/// Returns `PortalError::Config` when neither source yields a valid
/// configuration.
pub fn load() -> Result<Config> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "ignoring unreadable .env file"),
    }

    match load_from_env() {
        Ok(config) => {
            tracing::info!("configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "environment incomplete, trying config file");
            load_from_file(None)
        }
    }
}

/// Build the configuration from `PORTALKIT_*` variables.
///
/// Only the base URL is required; everything else falls back to
/// [`Config::default`].
///
/// # Errors
/// Returns `PortalError::Config` if the base URL is missing or a numeric
/// variable does not parse.
pub fn load_from_env() -> Result<Config> {
    let defaults = Config::default();

    let api = ApiConfig {
        base_url: env_var("PORTALKIT_API_BASE_URL")?,
        timeout_ms: env_parse("PORTALKIT_API_TIMEOUT_MS", defaults.api.timeout_ms)?,
        client_version: env_or("PORTALKIT_CLIENT_VERSION", defaults.api.client_version),
        platform: env_or("PORTALKIT_PLATFORM", defaults.api.platform),
    };

    let security = SecurityConfig {
        hardened: env_bool("PORTALKIT_SECURE_MODE", defaults.security.hardened),
        timeout_ms: env_parse("PORTALKIT_SECURE_TIMEOUT_MS", defaults.security.timeout_ms)?,
        csrf_token: std::env::var("PORTALKIT_CSRF_TOKEN").ok().filter(|t| !t.is_empty()),
        content_hash: env_bool("PORTALKIT_CONTENT_HASH", defaults.security.content_hash),
    };

    let logging = LoggingConfig {
        level: env_or("PORTALKIT_LOG_LEVEL", defaults.logging.level),
        json: env_bool("PORTALKIT_LOG_JSON", defaults.logging.json),
    };

    Ok(Config { api, security, logging })
}

/// Load configuration from a JSON or TOML file.
///
/// With `path` set to `None` the standard locations are probed via
/// [`probe_config_paths`].
///
/// # Errors
/// Returns `PortalError::Config` if no file is found, it cannot be read,
/// or its contents do not parse.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) if p.exists() => p,
        Some(p) => {
            return Err(PortalError::Config(format!("Config file not found: {}", p.display())))
        }
        None => probe_config_paths().ok_or_else(|| {
            PortalError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| PortalError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse `contents` in the format named by `path`'s extension.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| PortalError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| PortalError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(PortalError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// First existing config file among the standard locations.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }
    if let Some(exe_dir) =
        std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        roots.push(exe_dir);
    }

    roots
        .iter()
        .flat_map(|root| [root.clone(), root.join(".."), root.join("../..")])
        .flat_map(|dir| CONFIG_FILE_NAMES.map(|name| dir.join(name)))
        .find(|path| path.exists())
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| PortalError::Config(format!("Missing required environment variable: {key}")))
}

fn env_or(key: &str, default: String) -> String {
    std::env::var(key).ok().filter(|v| !v.is_empty()).unwrap_or(default)
}

fn env_parse<T: FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| PortalError::Config(format!("Invalid value for {key}: {e}"))),
        Err(_) => Ok(default),
    }
}

/// Accepts `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive).
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
