//! Obfuscated credential storage
//!
//! Holds the session's [`CredentialRecord`] in a [`SessionStorage`] under two
//! keys:
//! - the full record as encoded JSON
//! - the refresh token alone, encoded separately
//!
//! Expiry is checked lazily on read. Reads never fail: a missing, corrupt,
//! or expired record clears storage and reads as "not authenticated".
//! Writes fail loudly so a caller never believes a login stuck when it did
//! not. The encoding is obfuscation, not encryption.

use std::sync::Arc;

use async_trait::async_trait;
use portalkit_common::{decode, encode};
use portalkit_core::{AccessTokenProvider, SessionStorage};
use portalkit_domain::constants::{REFRESH_STORAGE_KEY, TOKEN_STORAGE_KEY};
use portalkit_domain::{CredentialRecord, PortalError, Result, TokenInfo};
use tracing::{debug, info, warn};

/// Owner of the session credential record.
#[derive(Clone)]
pub struct TokenStore {
    storage: Arc<dyn SessionStorage>,
}

impl TokenStore {
    /// Store backed by `storage`. Nothing is read until first use.
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// Persist `record`, replacing any previous credentials.
    ///
    /// # Errors
    /// Returns `PortalError::InvalidInput` for an already-expired record and
    /// propagates serialization or storage failures. A failed write leaves
    /// the store empty rather than half-written.
    pub fn set_tokens(&self, record: &CredentialRecord) -> Result<()> {
        if record.is_expired_at(now_ms()) {
            return Err(PortalError::InvalidInput(
                "refusing to store an already-expired credential record".to_string(),
            ));
        }

        let json = serde_json::to_string(record)?;
        let written = self
            .storage
            .set_item(TOKEN_STORAGE_KEY, &encode(&json))
            .and_then(|()| self.storage.set_item(REFRESH_STORAGE_KEY, &encode(&record.refresh_token)));

        if let Err(err) = written {
            warn!(error = %err, "failed to store credentials");
            self.clear();
            return Err(err);
        }

        info!(expires_at = record.expires_at, "stored session credentials");
        Ok(())
    }

    /// Current access token; clears storage when absent, corrupt, or expired.
    pub fn get_access_token(&self) -> Option<String> {
        let Some(record) = self.read_record() else {
            self.clear();
            return None;
        };

        if record.is_expired_at(now_ms()) {
            debug!(expires_at = record.expires_at, "stored access token expired");
            self.clear();
            return None;
        }

        Some(record.access_token)
    }

    /// Stored refresh token, independent of access-token expiry.
    pub fn get_refresh_token(&self) -> Option<String> {
        let encoded = self.storage.get_item(REFRESH_STORAGE_KEY)?;
        match decode(&encoded) {
            Ok(token) => Some(token),
            Err(err) => {
                warn!(error = %err, "stored refresh token could not be decoded");
                None
            }
        }
    }

    /// Whether an unexpired access token is stored.
    pub fn is_valid(&self) -> bool {
        self.get_access_token().is_some()
    }

    /// Remove all credential material. Idempotent.
    pub fn clear(&self) {
        self.storage.remove_item(TOKEN_STORAGE_KEY);
        self.storage.remove_item(REFRESH_STORAGE_KEY);
    }

    /// Validity and expiry of the stored record, without the tokens.
    pub fn info(&self) -> TokenInfo {
        self.read_record().map_or_else(TokenInfo::absent, |record| TokenInfo {
            is_valid: !record.is_expired_at(now_ms()),
            expires_at: Some(record.expires_at),
        })
    }

    fn read_record(&self) -> Option<CredentialRecord> {
        let encoded = self.storage.get_item(TOKEN_STORAGE_KEY)?;
        let parsed = decode(&encoded)
            .map_err(|e| e.to_string())
            .and_then(|json| serde_json::from_str(&json).map_err(|e| e.to_string()));

        match parsed {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(error = %err, "stored credentials could not be decoded");
                None
            }
        }
    }
}

#[async_trait]
impl AccessTokenProvider for TokenStore {
    async fn access_token(&self) -> Option<String> {
        self.get_access_token()
    }
}

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
