//! Domain types and models

pub mod api;
pub mod auth;
pub mod credentials;
pub mod failure;
pub mod feature;

pub use api::{
    ApiError, ApiResponse, EmptyResponse, PaginatedResponse, Pagination, RequestConfig,
};
pub use auth::{
    ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, LoginResponse,
    RefreshTokenRequest, RefreshTokenResponse, RegisterRequest, RegisterResponse,
    ResetPasswordRequest, UpdateProfileRequest, User, UserRole,
};
pub use credentials::{CredentialRecord, TokenInfo};
pub use failure::{ErrorType, Failure, Service};
pub use feature::{
    BulkDeleteRequest, CreateItemRequest, FeatureItem, ItemStatus, ListQuery, UpdateItemRequest,
};
