//! Session storage, credential stores, and the login lifecycle

pub mod local_store;
pub mod service;
pub mod storage;
pub mod token_store;

pub use local_store::{LocalTokenStore, StoredTokens};
pub use service::{SessionError, SessionResult, SessionService};
pub use storage::MemorySessionStorage;
pub use token_store::TokenStore;
