use std::sync::Arc;

use parking_lot::Mutex;
use portalkit_core::CriticalErrorReporter;
use portalkit_domain::{ApiError, Config};
use portalkit_infra::{ClientContext, MemorySessionStorage};
use serde_json::{json, Value};
use wiremock::MockServer;

/// Reporter that keeps every error it receives.
#[derive(Default)]
pub struct RecordingReporter {
    pub reports: Mutex<Vec<ApiError>>,
}

impl RecordingReporter {
    pub fn count(&self) -> usize {
        self.reports.lock().len()
    }
}

impl CriticalErrorReporter for RecordingReporter {
    fn report(&self, error: &ApiError) {
        self.reports.lock().push(error.clone());
    }
}

pub struct TestContext {
    pub context: ClientContext,
    pub storage: Arc<MemorySessionStorage>,
    pub reporter: Arc<RecordingReporter>,
}

/// Context pointed at `server`, optionally using the hardened profile.
pub fn context_for(server: &MockServer, hardened: bool) -> TestContext {
    let mut config = Config::default();
    config.api.base_url = server.uri();
    config.security.hardened = hardened;

    let storage = Arc::new(MemorySessionStorage::new());
    let reporter = Arc::new(RecordingReporter::default());
    let context = ClientContext::builder(config)
        .storage(storage.clone())
        .reporter(reporter.clone())
        .build()
        .expect("context should build");

    TestContext { context, storage, reporter }
}

pub fn user_json() -> Value {
    json!({
        "id": "u-1",
        "email": "minh@example.com",
        "name": "Minh",
        "role": "user",
        "isActive": true,
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    })
}

pub fn login_body(token: &str, refresh: &str, expires_in: i64) -> Value {
    json!({
        "data": {
            "token": token,
            "refreshToken": refresh,
            "user": user_json(),
            "expiresIn": expires_in
        },
        "success": true,
        "status": 200
    })
}
