//! Session lifecycle over the account service
//!
//! Ties [`AuthApi`] to the credential stores:
//! - `login` validates, authenticates, and persists the returned tokens
//! - `refresh` trades the stored refresh token for a new record, unless it
//!   is a JWT that has already expired
//! - `logout` tells the backend best-effort and always clears local state

use std::sync::Arc;

use portalkit_common::jwt;
use portalkit_core::validation::ensure_valid;
use portalkit_core::{validate_login_request, validate_register_request};
use portalkit_domain::{
    ApiError, ApiResponse, CredentialRecord, LoginRequest, LoginResponse, PortalError,
    RegisterRequest, RegisterResponse, TokenInfo, User,
};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::local_store::LocalTokenStore;
use super::token_store::TokenStore;
use crate::api::AuthApi;

/// Why a session operation failed.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Validation or backend failure, already normalized
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Credentials were accepted but could not be persisted
    #[error("failed to persist session: {0}")]
    Storage(#[from] PortalError),

    #[error("no refresh token available")]
    NotAuthenticated,
}

pub type SessionResult<T> = Result<T, SessionError>;

#[derive(Clone)]
pub struct SessionService {
    auth: AuthApi,
    tokens: Arc<TokenStore>,
    local: Arc<LocalTokenStore>,
}

impl SessionService {
    /// Service over `auth` and the two token stores it should keep in step.
    pub fn new(auth: AuthApi, tokens: Arc<TokenStore>, local: Arc<LocalTokenStore>) -> Self {
        Self { auth, tokens, local }
    }

    /// Authenticate and store the issued credentials.
    ///
    /// # Errors
    /// Validation failures are returned without any request being sent.
    /// A storage failure after a successful login is fatal.
    pub async fn login(&self, request: &LoginRequest) -> SessionResult<User> {
        ensure_valid(validate_login_request(request)).map_err(ApiError::from_failure)?;

        let response = self.auth.login(request).await?;
        let LoginResponse { token, refresh_token, user, expires_in } = response.data;
        self.persist(&token, &refresh_token, expires_in)?;

        info!(user_id = %user.id, "session started");
        Ok(user)
    }

    /// Validate and register; registration does not start a session.
    pub async fn register(
        &self,
        request: &RegisterRequest,
    ) -> SessionResult<ApiResponse<RegisterResponse>> {
        ensure_valid(validate_register_request(request)).map_err(ApiError::from_failure)?;
        Ok(self.auth.register(request).await?)
    }

    /// Exchange the stored refresh token for fresh credentials.
    ///
    /// A refresh token that is a JWT with a past `exp` is never sent; the
    /// session is cleared and `NotAuthenticated` returned. Opaque refresh
    /// tokens are always sent.
    pub async fn refresh(&self) -> SessionResult<TokenInfo> {
        let refresh_token = self.tokens.get_refresh_token().ok_or(SessionError::NotAuthenticated)?;

        let now = chrono::Utc::now().timestamp_millis();
        if jwt::expiration_ms(&refresh_token).is_some() {
            if jwt::is_expired(&refresh_token, now) {
                warn!("refresh token expired; clearing session");
                self.tokens.clear();
                self.local.clear();
                return Err(SessionError::NotAuthenticated);
            }
            debug!(remaining_ms = jwt::time_remaining_ms(&refresh_token, now), "refreshing session");
        }

        let response = self.auth.refresh_token(&refresh_token).await?;
        let data = response.data;
        self.persist(&data.token, &data.refresh_token, data.expires_in)?;

        info!("session refreshed");
        Ok(self.tokens.info())
    }

    /// End the session. Local credentials are cleared even when the backend
    /// call fails.
    pub async fn logout(&self) {
        if let Err(err) = self.auth.logout().await {
            warn!(error = %err, status = ?err.status, "backend logout failed; clearing local session");
        }
        self.tokens.clear();
        self.local.clear();
        info!("session ended");
    }

    /// Whether an unexpired credential record is stored.
    pub fn is_authenticated(&self) -> bool {
        self.tokens.is_valid()
    }

    /// Expiry of the current session, without its tokens.
    pub fn token_info(&self) -> TokenInfo {
        self.tokens.info()
    }

    fn persist(&self, access: &str, refresh: &str, expires_in: i64) -> SessionResult<()> {
        let now = chrono::Utc::now().timestamp_millis();
        let record = CredentialRecord::from_expires_in(access, refresh, expires_in, now);
        self.tokens.set_tokens(&record)?;
        if let Err(err) = self.local.store_auth_tokens(access, refresh) {
            self.tokens.clear();
            return Err(err.into());
        }
        Ok(())
    }
}
