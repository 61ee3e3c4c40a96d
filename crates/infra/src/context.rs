//! Composition root
//!
//! [`ClientContext`] owns one instance of every service and wires them in
//! dependency order: storage, credential stores, API client, domain modules,
//! session lifecycle. Build one per process (or per test) and pass it around
//! instead of reaching for globals.

use std::sync::Arc;

use portalkit_core::{AccessTokenProvider, CriticalErrorReporter, SessionStorage};
use portalkit_domain::{Config, Result};
use tracing::info;

use crate::api::{ApiClient, ApiClientConfig, AuthApi, FeatureApi, HardenedProfile};
use crate::session::{LocalTokenStore, MemorySessionStorage, SessionService, TokenStore};

/// Fully wired client stack.
#[derive(Clone)]
pub struct ClientContext {
    pub config: Config,
    pub storage: Arc<dyn SessionStorage>,
    pub tokens: Arc<TokenStore>,
    pub local_tokens: Arc<LocalTokenStore>,
    pub client: ApiClient,
    pub auth: AuthApi,
    pub features: FeatureApi,
    pub session: SessionService,
}

impl ClientContext {
    /// Start a context; storage and reporter default when not set.
    pub fn builder(config: Config) -> ClientContextBuilder {
        ClientContextBuilder { config, storage: None, reporter: None }
    }

    /// Context over in-memory storage with the default reporter.
    ///
    /// # Errors
    /// Returns `PortalError::Config` if the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        Self::builder(config).build()
    }
}

/// Builder for [`ClientContext`], from [`ClientContext::builder`].
pub struct ClientContextBuilder {
    config: Config,
    storage: Option<Arc<dyn SessionStorage>>,
    reporter: Option<Arc<dyn CriticalErrorReporter>>,
}

impl ClientContextBuilder {
    /// Backing store for both token stores. Defaults to memory.
    #[must_use]
    pub fn storage(mut self, storage: Arc<dyn SessionStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Hook for critical errors; only used by the hardened profile.
    #[must_use]
    pub fn reporter(mut self, reporter: Arc<dyn CriticalErrorReporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// # Errors
    /// Returns `PortalError::Config` if the HTTP client cannot be built.
    pub fn build(self) -> Result<ClientContext> {
        let config = self.config;
        let storage: Arc<dyn SessionStorage> = match self.storage {
            Some(storage) => storage,
            None => Arc::new(MemorySessionStorage::new()),
        };

        let tokens = Arc::new(TokenStore::new(Arc::clone(&storage)));
        let local_tokens = Arc::new(LocalTokenStore::new(Arc::clone(&storage)));

        let (client_config, auth): (ApiClientConfig, Arc<dyn AccessTokenProvider>) =
            if config.security.hardened {
                let mut profile = HardenedProfile::from_config(
                    &config.security,
                    config.api.client_version.clone(),
                    config.api.platform.clone(),
                );
                if let Some(reporter) = self.reporter {
                    profile = profile.with_reporter(reporter);
                }
                let client_config = ApiClientConfig {
                    base_url: config.api.base_url.clone(),
                    timeout: config.security.timeout(),
                    hardened: Some(profile),
                };
                let provider: Arc<dyn AccessTokenProvider> = tokens.clone();
                (client_config, provider)
            } else {
                let client_config = ApiClientConfig {
                    base_url: config.api.base_url.clone(),
                    timeout: config.api.timeout(),
                    hardened: None,
                };
                let provider: Arc<dyn AccessTokenProvider> = local_tokens.clone();
                (client_config, provider)
            };

        let client = ApiClient::builder().config(client_config).auth(auth).build()?;
        let auth = AuthApi::new(&client);
        let features = FeatureApi::new(&client);
        let session =
            SessionService::new(auth.clone(), Arc::clone(&tokens), Arc::clone(&local_tokens));

        info!(
            base_url = %config.api.base_url,
            hardened = client.is_hardened(),
            "client context ready"
        );

        Ok(ClientContext { config, storage, tokens, local_tokens, client, auth, features, session })
    }
}
