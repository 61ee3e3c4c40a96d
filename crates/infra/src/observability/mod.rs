//! Tracing setup

pub mod logging;

pub use logging::init;
