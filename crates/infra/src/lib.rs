//! # Portalkit Infrastructure
//!
//! Infrastructure implementations of the core ports.
//!
//! This crate contains:
//! - The reqwest transport and the shared API client (base and hardened
//!   profiles)
//! - Account and feature-item API modules
//! - Credential stores and the session lifecycle
//! - Configuration loading and tracing setup
//! - [`ClientContext`], which wires all of the above together
//!
//! ## Architecture
//! - Implements traits defined in `portalkit-core`
//! - Depends on `portalkit-domain`, `portalkit-common`, and `portalkit-core`
//! - Contains all "impure" code (network, storage, environment)

pub mod api;
pub mod config;
pub mod context;
pub mod errors;
pub mod http;
pub mod observability;
pub mod session;

// Re-export commonly used items
pub use api::{ApiClient, ApiClientBuilder, ApiClientConfig, AuthApi, FeatureApi, HardenedProfile};
pub use context::{ClientContext, ClientContextBuilder};
pub use errors::InfraError;
pub use http::HttpClient;
pub use session::{
    LocalTokenStore, MemorySessionStorage, SessionError, SessionService, StoredTokens, TokenStore,
};
