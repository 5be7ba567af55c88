//! TTL cache over the storage substrate.

use serde::{de::DeserializeOwned, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use super::clock::{Clock, SystemClock};
use super::entry::CacheEnvelope;
use super::key::CacheKey;
use crate::storage::StorageBackend;

/// Cache counters (snapshot).
///
/// Evictions count lazily removed records: expired entries and corrupt
/// ones discarded on read.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub sets: u64,
    pub evictions: u64,
}

impl CacheStats {
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[derive(Default)]
struct AtomicStats {
    hits: AtomicU64,
    misses: AtomicU64,
    sets: AtomicU64,
    evictions: AtomicU64,
}

impl AtomicStats {
    fn to_stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            sets: self.sets.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }
}

/// TTL cache with lazy expiry.
///
/// `get` never raises: absence is the only failure mode. Expired and
/// undecodable records are removed by the read that finds them. `put`
/// unconditionally overwrites. The key space is unbounded; time-based
/// expiry is the only eviction mechanism.
pub struct TtlCache {
    storage: Arc<dyn StorageBackend>,
    clock: Arc<dyn Clock>,
    enabled: bool,
    key_prefix: Option<String>,
    stats: AtomicStats,
}

impl TtlCache {
    pub fn new(storage: Arc<dyn StorageBackend>) -> Self {
        Self {
            storage,
            clock: Arc::new(SystemClock),
            enabled: true,
            key_prefix: None,
            stats: AtomicStats::default(),
        }
    }

    /// Substitute the time source (tests inject a [`super::ManualClock`]).
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Disabled caches always miss and never write.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Prefix storage keys so several clients can share one substrate.
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }

    /// Look up a value. Returns `None` for absent, expired, or undecodable
    /// entries; the latter two are removed from storage as a side effect.
    pub fn get<T: DeserializeOwned>(&self, key: &CacheKey) -> Option<T> {
        if !self.enabled {
            return None;
        }
        let storage_key = self.storage_key(key);
        let raw = match self.storage.read(&storage_key) {
            Some(raw) => raw,
            None => {
                self.stats.misses.fetch_add(1, Ordering::Relaxed);
                return None;
            }
        };

        let envelope = match CacheEnvelope::<T>::decode(&raw) {
            Some(env) => env,
            None => {
                warn!(key = key.label(), "discarding undecodable cache record");
                self.storage.remove(&storage_key);
                self.stats.misses.fetch_add(1, Ordering::Relaxed);
                self.stats.evictions.fetch_add(1, Ordering::Relaxed);
                return None;
            }
        };

        if !envelope.is_fresh(self.clock.now_millis()) {
            debug!(key = key.label(), "cache entry expired");
            self.storage.remove(&storage_key);
            self.stats.misses.fetch_add(1, Ordering::Relaxed);
            self.stats.evictions.fetch_add(1, Ordering::Relaxed);
            return None;
        }

        self.stats.hits.fetch_add(1, Ordering::Relaxed);
        Some(envelope.value)
    }

    /// Store a value with the given lifetime (`None` = never expires).
    /// Overwrites any existing entry for the key. Never fails: storage
    /// trouble degrades to a miss on the next read.
    pub fn put<T: Serialize>(&self, key: &CacheKey, value: &T, ttl: Option<Duration>) {
        if !self.enabled {
            return;
        }
        let envelope = CacheEnvelope::new(value, self.clock.now_millis(), ttl);
        let raw = match serde_json::to_string(&envelope) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key = key.label(), error = %e, "cache serialization failed");
                return;
            }
        };
        self.storage.write(&self.storage_key(key), &raw);
        self.stats.sets.fetch_add(1, Ordering::Relaxed);
    }

    pub fn remove(&self, key: &CacheKey) {
        self.storage.remove(&self.storage_key(key));
    }

    pub fn stats(&self) -> CacheStats {
        self.stats.to_stats()
    }

    pub fn backend_name(&self) -> &'static str {
        self.storage.name()
    }

    fn storage_key(&self, key: &CacheKey) -> String {
        match &self.key_prefix {
            Some(prefix) => format!("{}_{}", prefix, key.as_str()),
            None => key.as_str().to_string(),
        }
    }
}
