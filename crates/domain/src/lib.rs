//! # Portalkit Domain
//!
//! Data types shared by every Portalkit crate.
//!
//! This crate contains:
//! - Session credential types (`CredentialRecord`, `TokenInfo`)
//! - Response envelopes and the normalized `ApiError`
//! - The tagged `Failure` taxonomy and logical `Service` tags
//! - Request/response shapes for the auth and feature-item APIs
//! - Configuration structures and constants
//!
//! ## Architecture
//! - No dependencies on other Portalkit crates
//! - Only serde/thiserror
//! - Pure data structures, no I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
