//! Shared utilities for the Portalkit client crates.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `foundation`: storage codec, request ids, JWT helpers, validators
//! - `runtime`: async helpers (timeout wrapper)

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Foundation tier
// -----------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod codec;
#[cfg(feature = "foundation")]
pub mod ids;
#[cfg(feature = "foundation")]
pub mod jwt;
#[cfg(feature = "foundation")]
pub mod validation;

// Runtime tier
// --------------------------------------------------------------------
#[cfg(feature = "runtime")]
pub mod time;

#[cfg(feature = "foundation")]
pub use codec::{content_hash, decode, encode, CodecError};
#[cfg(feature = "foundation")]
pub use ids::request_id;
#[cfg(feature = "runtime")]
pub use time::{with_timeout, with_timeout_message, Deadline, TimeoutError, TimeoutSignal};
