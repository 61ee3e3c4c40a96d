//! Account service module (`/account-svc/v1`)

use portalkit_domain::constants::AUTH_BASE_PATH;
use portalkit_domain::{
    ApiError, ApiResponse, ChangePasswordRequest, EmptyResponse, ForgotPasswordRequest,
    LoginRequest, LoginResponse, RefreshTokenRequest, RefreshTokenResponse, RegisterRequest,
    RegisterResponse, RequestConfig, ResetPasswordRequest, UpdateProfileRequest, User,
};
use serde_json::json;

use super::client::ApiClient;

/// Typed calls against the account service.
#[derive(Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    /// Bind to the account service under the client's base URL.
    pub fn new(client: &ApiClient) -> Self {
        Self { client: client.scoped(AUTH_BASE_PATH) }
    }

    /// Account service root, including its base path.
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// `POST /users/login`
    pub async fn login(
        &self,
        credentials: &LoginRequest,
    ) -> Result<ApiResponse<LoginResponse>, ApiError> {
        self.client.post("/users/login", Some(credentials), &RequestConfig::new()).await
    }

    /// `POST /users/register`
    pub async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<ApiResponse<RegisterResponse>, ApiError> {
        self.client.post("/users/register", Some(request), &RequestConfig::new()).await
    }

    /// `POST /users/logout`. Does not touch local credentials.
    pub async fn logout(&self) -> Result<EmptyResponse, ApiError> {
        self.client.post("/users/logout", None::<&()>, &RequestConfig::new()).await
    }

    /// Trade `refresh_token` for a new token pair.
    pub async fn refresh_token(
        &self,
        refresh_token: &str,
    ) -> Result<ApiResponse<RefreshTokenResponse>, ApiError> {
        let body = RefreshTokenRequest { refresh_token: refresh_token.to_string() };
        self.client.post("/users/refresh-token", Some(&body), &RequestConfig::new()).await
    }

    /// Ask the backend to email a reset link.
    pub async fn forgot_password(
        &self,
        request: &ForgotPasswordRequest,
    ) -> Result<EmptyResponse, ApiError> {
        self.client.post("/users/forgot-password", Some(request), &RequestConfig::new()).await
    }

    /// `POST /users/reset-password`
    pub async fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> Result<EmptyResponse, ApiError> {
        self.client.post("/users/reset-password", Some(request), &RequestConfig::new()).await
    }

    /// `POST /users/change-password`
    pub async fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<EmptyResponse, ApiError> {
        self.client.post("/users/change-password", Some(request), &RequestConfig::new()).await
    }

    /// Profile of the authenticated user.
    pub async fn get_profile(&self) -> Result<ApiResponse<User>, ApiError> {
        self.client.get("/users/profile", &RequestConfig::new()).await
    }

    /// `PUT /users/profile`; only the fields set in `request` are sent.
    pub async fn update_profile(
        &self,
        request: &UpdateProfileRequest,
    ) -> Result<ApiResponse<User>, ApiError> {
        self.client.put("/users/profile", Some(request), &RequestConfig::new()).await
    }

    /// `DELETE /users/account`
    pub async fn delete_account(&self) -> Result<EmptyResponse, ApiError> {
        self.client.delete("/users/account", &RequestConfig::new()).await
    }

    /// Confirm an email address with the token from the verification link.
    pub async fn verify_email(&self, token: &str) -> Result<EmptyResponse, ApiError> {
        let endpoint = format!("/users/verify-email/{}", urlencoding::encode(token));
        self.client.post(&endpoint, None::<&()>, &RequestConfig::new()).await
    }

    /// Send the verification email to `email` again.
    pub async fn resend_verification(&self, email: &str) -> Result<EmptyResponse, ApiError> {
        let body = json!({ "email": email });
        self.client.post("/users/resend-verification", Some(&body), &RequestConfig::new()).await
    }
}
