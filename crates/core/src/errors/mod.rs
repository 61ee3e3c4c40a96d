//! Error classification for failures surfaced by the HTTP layer
//!
//! - **[`service`]**: maps a request URL to its logical backend service
//! - **[`messages`]**: localized per-service message tables
//! - **[`classifier`]**: user-facing message and coarse type for a failure
//! - **[`ports`]**: side channel for critical errors

pub mod classifier;
pub mod messages;
pub mod ports;
pub mod service;
