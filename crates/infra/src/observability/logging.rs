//! Global tracing subscriber installation
//!
//! `RUST_LOG` wins over [`LoggingConfig::level`] when set.

use portalkit_domain::{LoggingConfig, PortalError, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Install the process-wide subscriber.
///
/// # Errors
/// Returns `PortalError::Config` for an invalid level directive or when a
/// global subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config)?;
    let builder = fmt().with_env_filter(filter).with_target(true);

    let installed = if config.json {
        builder.json().with_current_span(true).try_init()
    } else {
        builder.compact().try_init()
    };

    installed.map_err(|e| PortalError::Config(format!("failed to install tracing subscriber: {e}")))
}

fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level)
        .map_err(|e| PortalError::Config(format!("invalid log level '{}': {e}", config.level)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_an_error_not_a_panic() {
        let config = LoggingConfig::default();
        let _ = init(&config);
        assert!(matches!(init(&config), Err(PortalError::Config(_))));
    }
}
