//! # Portalkit Core
//!
//! Pure business rules for the API/session layer - no HTTP or storage code.
//!
//! This crate contains:
//! - Port interfaces (traits) for session storage, token lookup, and
//!   critical-error reporting
//! - The error classifier and logical service detection
//! - Caller-side request validation
//!
//! ## Architecture Principles
//! - Only depends on `portalkit-domain` and `portalkit-common`
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod errors;
pub mod session;
pub mod validation;

// Re-export specific items to avoid ambiguity
pub use errors::classifier::{
    api_error_message, error_message, error_type, is_network_error, is_timeout_error,
};
pub use errors::ports::CriticalErrorReporter;
pub use errors::service::detect_service;
pub use session::ports::{AccessTokenProvider, SessionStorage};
pub use validation::{validate_login_request, validate_register_request};
