//! Session credential boundaries

pub mod ports;

pub use ports::{AccessTokenProvider, SessionStorage};
