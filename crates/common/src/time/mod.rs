//! Time utilities
//!
//! - **[`timeout`]**: deadline enforcement for fallible async operations

pub mod timeout;

pub use timeout::{
    with_timeout, with_timeout_message, Deadline, TimeoutError, TimeoutSignal, DEFAULT_DEADLINE,
    TIMEOUT_MESSAGE,
};
