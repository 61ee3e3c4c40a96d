//! Shared test helpers for `portalkit-core` integration tests.
//!
//! In-memory port implementations so tests can exercise the traits through
//! trait objects without any infrastructure crate.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use portalkit_core::{AccessTokenProvider, CriticalErrorReporter, SessionStorage};
use portalkit_domain::{ApiError, PortalError, Result as DomainResult};

/// Map-backed storage that can be switched into a failing mode.
#[derive(Default)]
pub struct MockSessionStorage {
    items: Mutex<HashMap<String, String>>,
    fail_writes: bool,
}

impl MockSessionStorage {
    pub fn failing() -> Self {
        Self { fail_writes: true, ..Self::default() }
    }

    pub fn len(&self) -> usize {
        self.items.lock().len()
    }
}

impl SessionStorage for MockSessionStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> DomainResult<()> {
        if self.fail_writes {
            return Err(PortalError::Storage("quota exceeded".into()));
        }
        self.items.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.items.lock().remove(key);
    }
}

/// Token provider returning a fixed value.
pub struct StaticTokenProvider(pub Option<String>);

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Reporter that records every error it receives.
#[derive(Default)]
pub struct RecordingReporter {
    pub reported: Mutex<Vec<ApiError>>,
}

impl CriticalErrorReporter for RecordingReporter {
    fn report(&self, error: &ApiError) {
        self.reported.lock().push(error.clone());
    }
}
