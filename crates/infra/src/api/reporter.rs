//! Default critical-error reporter

use portalkit_core::CriticalErrorReporter;
use portalkit_domain::ApiError;
use tracing::error;

/// Reports critical errors as structured `error!` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl CriticalErrorReporter for TracingReporter {
    fn report(&self, err: &ApiError) {
        error!(
            message = %err.message,
            status = ?err.status,
            code = ?err.code,
            url = ?err.url,
            timestamp = ?err.timestamp,
            "reporting critical error"
        );
    }
}
