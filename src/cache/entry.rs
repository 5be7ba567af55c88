//! Serialized cache envelope.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Wrapper persisted to the storage substrate: the payload plus the
/// metadata needed to decide freshness later. `ttl_ms: None` is the
/// reserved never-expires sentinel (serialized as JSON `null`).
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CacheEnvelope<T> {
    pub value: T,
    pub stored_at_ms: u64,
    pub ttl_ms: Option<u64>,
}

impl<T> CacheEnvelope<T> {
    pub fn new(value: T, stored_at_ms: u64, ttl: Option<std::time::Duration>) -> Self {
        Self {
            value,
            stored_at_ms,
            ttl_ms: ttl.map(|d| d.as_millis() as u64),
        }
    }

    /// Valid iff `now - stored_at < ttl`, unless the TTL is the infinite
    /// sentinel. A clock that moved backwards reads as age zero.
    pub fn is_fresh(&self, now_ms: u64) -> bool {
        match self.ttl_ms {
            None => true,
            Some(ttl_ms) => now_ms.saturating_sub(self.stored_at_ms) < ttl_ms,
        }
    }
}

impl<T: DeserializeOwned> CacheEnvelope<T> {
    /// Decode a raw stored record. Any malformation is `None`; the caller
    /// treats that as a miss and removes the record.
    pub fn decode(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn fresh_within_ttl() {
        let env = CacheEnvelope::new("v", 1_000, Some(Duration::from_millis(500)));
        assert!(env.is_fresh(1_000));
        assert!(env.is_fresh(1_499));
        assert!(!env.is_fresh(1_500));
        assert!(!env.is_fresh(10_000));
    }

    #[test]
    fn sentinel_never_expires() {
        let env = CacheEnvelope::new("v", 0, None);
        assert!(env.is_fresh(u64::MAX));
    }

    #[test]
    fn backwards_clock_reads_as_fresh() {
        let env = CacheEnvelope::new("v", 5_000, Some(Duration::from_millis(1)));
        assert!(env.is_fresh(4_000));
    }

    #[test]
    fn sentinel_round_trips_as_null() {
        let env = CacheEnvelope::new(42u32, 7, None);
        let raw = serde_json::to_string(&env).expect("serialize");
        assert!(raw.contains("\"ttl_ms\":null"));
        let back: CacheEnvelope<u32> = CacheEnvelope::decode(&raw).expect("decode");
        assert_eq!(back.value, 42);
        assert!(back.ttl_ms.is_none());
    }

    #[test]
    fn garbage_decodes_to_none() {
        assert!(CacheEnvelope::<u32>::decode("{ not json").is_none());
        assert!(CacheEnvelope::<u32>::decode("{\"wrong\":\"shape\"}").is_none());
    }
}
