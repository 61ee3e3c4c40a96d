//! Backend API access
//!
//! [`ApiClient`] is the shared HTTP pipeline (bearer auth, deadlines, error
//! normalization, optional hardened profile). The domain modules bind it to
//! a fixed base path and expose typed calls:
//!
//! - [`AuthApi`]: account service (`/account-svc/v1`)
//! - [`FeatureApi`]: feature-item CRUD (`/new-feat`)

pub mod auth;
pub mod client;
pub mod feature;
pub mod profile;
pub mod reporter;

pub use auth::AuthApi;
pub use client::{ApiClient, ApiClientBuilder, ApiClientConfig};
pub use feature::FeatureApi;
pub use profile::HardenedProfile;
pub use reporter::TracingReporter;
