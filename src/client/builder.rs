use std::sync::Arc;

use crate::cache::{Clock, TtlCache, TtlTable};
use crate::client::core::AstrocastClient;
use crate::retry::RetryPolicy;
use crate::storage::{MemoryStore, StorageBackend};
use crate::transport::HttpTransport;
use crate::types::reading::Language;
use crate::Result;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small and predictable (developer-friendly).
pub struct AstrocastClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    model: Option<String>,
    language: Language,
    storage: Option<Arc<dyn StorageBackend>>,
    clock: Option<Arc<dyn Clock>>,
    retry: RetryPolicy,
    ttl: TtlTable,
    cache_enabled: bool,
}

impl AstrocastClientBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: None,
            language: Language::default(),
            storage: None,
            clock: None,
            retry: RetryPolicy::default(),
            ttl: TtlTable::default(),
            cache_enabled: true,
        }
    }

    /// Explicit API key. Without one, the keyring entry and the
    /// `ASTROCAST_API_KEY` environment variable are consulted in order.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the endpoint base URL.
    ///
    /// This is primarily for testing with mock servers; the
    /// `ASTROCAST_BASE_URL` environment variable serves production
    /// redirection.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Model identifier sent with every completion request.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Output language for generated readings.
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Substitute the storage substrate. Defaults to an in-memory store;
    /// pass a [`crate::storage::FileStore`] for persistence across runs.
    pub fn storage(mut self, storage: Arc<dyn StorageBackend>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Substitute the cache time source (tests inject a manual clock).
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Backoff schedule for remote calls.
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry = policy;
        self
    }

    /// Per-content-kind TTL overrides.
    pub fn ttl_table(mut self, table: TtlTable) -> Self {
        self.ttl = table;
        self
    }

    /// Disable the cache wholesale (every request goes remote).
    pub fn cache_enabled(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<AstrocastClient> {
        let base_url = self
            .base_url
            .or_else(|| std::env::var("ASTROCAST_BASE_URL").ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let model = self
            .model
            .or_else(|| std::env::var("ASTROCAST_MODEL").ok())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let transport = Arc::new(HttpTransport::new(&base_url, &model, self.api_key)?);

        let storage = self
            .storage
            .unwrap_or_else(|| Arc::new(MemoryStore::new()));
        let mut cache = TtlCache::new(storage).with_enabled(self.cache_enabled);
        if let Some(clock) = self.clock {
            cache = cache.with_clock(clock);
        }

        Ok(AstrocastClient::assemble(
            transport,
            Arc::new(cache),
            self.ttl,
            self.retry,
            self.language,
        ))
    }
}

impl Default for AstrocastClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
