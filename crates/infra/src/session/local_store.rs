//! Plain token source used by the base client profile.
//!
//! Stores the access and refresh tokens unencoded under `auth_token` and
//! `refresh_token`, with no expiry tracking.

use std::sync::Arc;

use async_trait::async_trait;
use portalkit_core::{AccessTokenProvider, SessionStorage};
use portalkit_domain::constants::{PLAIN_ACCESS_TOKEN_KEY, PLAIN_REFRESH_TOKEN_KEY};
use portalkit_domain::Result;

/// Tokens as read back from the plain store.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct StoredTokens {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl std::fmt::Debug for StoredTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredTokens")
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Unencoded token pair for the base profile.
///
/// Has no notion of expiry; the hardened profile uses [`TokenStore`](super::TokenStore) instead.
#[derive(Clone)]
pub struct LocalTokenStore {
    storage: Arc<dyn SessionStorage>,
}

impl LocalTokenStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// Write both tokens. Fails if either write fails.
    pub fn store_auth_tokens(&self, access_token: &str, refresh_token: &str) -> Result<()> {
        self.storage.set_item(PLAIN_ACCESS_TOKEN_KEY, access_token)?;
        self.storage.set_item(PLAIN_REFRESH_TOKEN_KEY, refresh_token)
    }

    /// Both tokens as currently stored.
    pub fn stored_tokens(&self) -> StoredTokens {
        StoredTokens {
            access_token: self.storage.get_item(PLAIN_ACCESS_TOKEN_KEY),
            refresh_token: self.storage.get_item(PLAIN_REFRESH_TOKEN_KEY),
        }
    }

    /// Remove both tokens.
    pub fn clear(&self) {
        self.storage.remove_item(PLAIN_ACCESS_TOKEN_KEY);
        self.storage.remove_item(PLAIN_REFRESH_TOKEN_KEY);
    }
}

#[async_trait]
impl AccessTokenProvider for LocalTokenStore {
    async fn access_token(&self) -> Option<String> {
        self.storage.get_item(PLAIN_ACCESS_TOKEN_KEY).filter(|token| !token.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::storage::MemorySessionStorage;

    #[tokio::test]
    async fn stores_and_clears_plain_tokens() {
        let storage = Arc::new(MemorySessionStorage::new());
        let store = LocalTokenStore::new(storage.clone());

        store.store_auth_tokens("a-1", "r-1").unwrap();
        assert_eq!(storage.get_item("auth_token").as_deref(), Some("a-1"));
        assert_eq!(
            store.stored_tokens(),
            StoredTokens { access_token: Some("a-1".into()), refresh_token: Some("r-1".into()) }
        );
        assert_eq!(store.access_token().await.as_deref(), Some("a-1"));

        store.clear();
        assert_eq!(store.stored_tokens(), StoredTokens::default());
        assert_eq!(store.access_token().await, None);
    }

    #[test]
    fn debug_redacts_tokens() {
        let tokens = StoredTokens { access_token: Some("secret".into()), refresh_token: None };
        assert!(!format!("{tokens:?}").contains("secret"));
    }
}
