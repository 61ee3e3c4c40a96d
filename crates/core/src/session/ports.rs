//! Port interfaces for session credential storage
//!
//! These traits define the boundaries between the HTTP layer and whatever
//! holds credentials for the lifetime of a session.

use async_trait::async_trait;
use portalkit_domain::Result;

/// Session-scoped string key/value storage.
///
/// Reads and writes are synchronous. Implementations decide where values
/// live (memory, browser storage, a file); values are opaque strings.
pub trait SessionStorage: Send + Sync {
    /// Value stored under `key`, if any
    fn get_item(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing a missing key is a no-op
    fn remove_item(&self, key: &str);
}

/// Source of the bearer token attached to outbound requests.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Current access token, or `None` when the session is unauthenticated
    async fn access_token(&self) -> Option<String>;
}
