//! Session credential types
//!
//! A [`CredentialRecord`] is owned exclusively by the token store; other
//! components only ever see the access token string or a [`TokenInfo`]
//! projection.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TOKEN_TYPE;

/// Access/refresh token pair with its absolute expiry.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRecord {
    /// Bearer credential for authenticated calls
    pub access_token: String,
    /// Credential used to mint a new access token
    pub refresh_token: String,
    /// Absolute expiry instant (milliseconds since the Unix epoch)
    pub expires_at: i64,
    /// Authorization scheme (e.g. "Bearer")
    pub token_type: String,
}

impl CredentialRecord {
    /// Create a bearer record expiring at `expires_at` (epoch millis).
    #[must_use]
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        expires_at: i64,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            expires_at,
            token_type: DEFAULT_TOKEN_TYPE.to_string(),
        }
    }

    /// Create a bearer record from a relative lifetime in seconds, as returned
    /// by the login and refresh endpoints.
    #[must_use]
    pub fn from_expires_in(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        expires_in_secs: i64,
        now_ms: i64,
    ) -> Self {
        let expires_at = now_ms.saturating_add(expires_in_secs.saturating_mul(1000));
        Self::new(access_token, refresh_token, expires_at)
    }

    /// Returns `true` once `now_ms` has reached the expiry instant.
    #[must_use]
    pub const fn is_expired_at(&self, now_ms: i64) -> bool {
        now_ms >= self.expires_at
    }
}

impl fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .field("token_type", &self.token_type)
            .finish()
    }
}

/// Diagnostic view of the stored credentials that never exposes a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    pub is_valid: bool,
    pub expires_at: Option<i64>,
}

impl TokenInfo {
    /// Projection used when nothing (decodable) is stored.
    #[must_use]
    pub const fn absent() -> Self {
        Self { is_valid: false, expires_at: None }
    }
}
