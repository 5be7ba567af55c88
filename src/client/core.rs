use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::cache::{CacheKey, CacheStats, ContentKind, TtlCache, TtlTable};
use crate::prompt::{decode_reading, Prompt};
use crate::retry::{with_retry, RetryPolicy};
use crate::transport::HttpTransport;
use crate::types::reading::Language;
use crate::Result;

/// Client for AI-generated astrology readings.
///
/// Every reading operation runs the same template: derive a deterministic
/// cache key, probe the cache, and only on a miss call the generative
/// endpoint through the retry loop, storing the decoded result with the
/// content kind's TTL before returning it. Failures propagate unwrapped
/// and nothing is cached on failure.
pub struct AstrocastClient {
    transport: Arc<HttpTransport>,
    cache: Arc<TtlCache>,
    ttl: TtlTable,
    retry: RetryPolicy,
    language: Language,
}

impl AstrocastClient {
    /// Create a client with defaults; see [`AstrocastClientBuilder`] for
    /// the full set of knobs.
    ///
    /// [`AstrocastClientBuilder`]: crate::client::AstrocastClientBuilder
    pub fn new() -> Result<Self> {
        crate::client::builder::AstrocastClientBuilder::new().build()
    }

    pub fn builder() -> crate::client::builder::AstrocastClientBuilder {
        crate::client::builder::AstrocastClientBuilder::new()
    }

    pub(crate) fn assemble(
        transport: Arc<HttpTransport>,
        cache: Arc<TtlCache>,
        ttl: TtlTable,
        retry: RetryPolicy,
        language: Language,
    ) -> Self {
        Self {
            transport,
            cache,
            ttl,
            retry,
            language,
        }
    }

    /// The language readings are generated in.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Cache counters for this client.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// The cached-remote-call template shared by every reading operation.
    pub(crate) async fn cached_fetch<T>(
        &self,
        kind: ContentKind,
        key: CacheKey,
        prompt: Prompt,
    ) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
    {
        if let Some(hit) = self.cache.get::<T>(&key) {
            debug!(kind = kind.name(), key = key.label(), "cache hit");
            return Ok(hit);
        }
        debug!(kind = kind.name(), key = key.label(), "cache miss");

        let transport = &*self.transport;
        let prompt = &prompt;
        let value: T = with_retry(&self.retry, move || async move {
            let raw = transport.complete(prompt).await?;
            decode_reading::<T>(&raw)
        })
        .await?;

        self.cache.put(&key, &value, self.ttl.ttl_for(kind));
        Ok(value)
    }
}
