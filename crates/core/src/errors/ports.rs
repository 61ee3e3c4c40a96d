//! Port interface for critical-error reporting

use portalkit_domain::ApiError;

/// Side channel for auth and server failures raised by the hardened client.
///
/// Reporting is best-effort: implementations must not block for long and
/// must not fail back into the request path.
pub trait CriticalErrorReporter: Send + Sync {
    fn report(&self, error: &ApiError);
}
