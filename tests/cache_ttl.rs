//! TTL cache behavior over the storage substrate.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use astrocast::cache::{CacheKey, ManualClock, TtlCache};
use astrocast::storage::{FileStore, MemoryStore, StorageBackend};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Reading {
    text: String,
    score: u32,
}

fn reading(text: &str) -> Reading {
    Reading {
        text: text.to_string(),
        score: 42,
    }
}

fn key(name: &str) -> CacheKey {
    CacheKey::compose("test").field("name", name).finish()
}

fn cache_over(store: Arc<MemoryStore>) -> (TtlCache, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(1_700_000_000_000));
    let cache = TtlCache::new(store as Arc<dyn StorageBackend>).with_clock(clock.clone());
    (cache, clock)
}

#[test]
fn value_is_visible_until_its_ttl_elapses() {
    let (cache, clock) = cache_over(Arc::new(MemoryStore::new()));
    cache.put(&key("h"), &reading("fresh"), Some(Duration::from_secs(3600)));

    assert_eq!(cache.get::<Reading>(&key("h")), Some(reading("fresh")));

    clock.advance(Duration::from_secs(3599));
    assert_eq!(cache.get::<Reading>(&key("h")), Some(reading("fresh")));

    clock.advance(Duration::from_secs(2));
    assert_eq!(cache.get::<Reading>(&key("h")), None);
}

#[test]
fn infinite_ttl_never_expires() {
    let (cache, clock) = cache_over(Arc::new(MemoryStore::new()));
    cache.put(&key("geo"), &reading("forever"), None);

    // Ten years later it is still there.
    clock.advance(Duration::from_secs(10 * 365 * 24 * 3600));
    assert_eq!(cache.get::<Reading>(&key("geo")), Some(reading("forever")));
}

#[test]
fn overwrite_replaces_value_and_ttl_atomically() {
    let (cache, clock) = cache_over(Arc::new(MemoryStore::new()));
    cache.put(&key("h"), &reading("v1"), Some(Duration::from_secs(10)));
    cache.put(&key("h"), &reading("v2"), Some(Duration::from_secs(3600)));

    // ttl1 has long passed; ttl2 governs, and only v2 is ever visible.
    clock.advance(Duration::from_secs(600));
    assert_eq!(cache.get::<Reading>(&key("h")), Some(reading("v2")));

    clock.advance(Duration::from_secs(3600));
    assert_eq!(cache.get::<Reading>(&key("h")), None);
}

#[test]
fn corrupt_record_reads_as_miss_and_is_removed() {
    let store = Arc::new(MemoryStore::new());
    let (cache, _clock) = cache_over(store.clone());

    cache.put(&key("good"), &reading("ok"), Some(Duration::from_secs(3600)));
    // Clobber a second record behind the cache's back.
    store.write(key("bad").as_str(), "{ this is not an envelope");

    assert_eq!(cache.get::<Reading>(&key("bad")), None);
    assert!(
        store.read(key("bad").as_str()).is_none(),
        "broken record should be removed"
    );
    // Other keys are unaffected.
    assert_eq!(cache.get::<Reading>(&key("good")), Some(reading("ok")));
}

#[test]
fn type_mismatch_is_also_a_silent_miss() {
    let store = Arc::new(MemoryStore::new());
    let (cache, _clock) = cache_over(store.clone());

    cache.put(&key("k"), &"just a string", Some(Duration::from_secs(3600)));
    // Reading it back as a struct must not panic or error.
    assert_eq!(cache.get::<Reading>(&key("k")), None);
    assert!(store.read(key("k").as_str()).is_none());
}

#[test]
fn stats_track_hits_misses_and_evictions() {
    let (cache, clock) = cache_over(Arc::new(MemoryStore::new()));

    assert_eq!(cache.get::<Reading>(&key("h")), None); // miss
    cache.put(&key("h"), &reading("v"), Some(Duration::from_secs(60)));
    assert!(cache.get::<Reading>(&key("h")).is_some()); // hit
    clock.advance(Duration::from_secs(61));
    assert_eq!(cache.get::<Reading>(&key("h")), None); // miss + eviction

    let stats = cache.stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 2);
    assert_eq!(stats.sets, 1);
    assert_eq!(stats.evictions, 1);
    assert!((stats.hit_ratio() - 1.0 / 3.0).abs() < 1e-9);
}

#[test]
fn file_store_persists_across_instances() {
    let tmp = tempfile::TempDir::new().expect("tempdir");
    let clock = Arc::new(ManualClock::new(1_700_000_000_000));

    {
        let store: Arc<dyn StorageBackend> = Arc::new(FileStore::new(tmp.path()));
        let cache = TtlCache::new(store).with_clock(clock.clone());
        cache.put(&key("h"), &reading("persisted"), Some(Duration::from_secs(3600)));
    }

    // A fresh cache over the same directory sees the entry.
    let store: Arc<dyn StorageBackend> = Arc::new(FileStore::new(tmp.path()));
    let cache = TtlCache::new(store).with_clock(clock.clone());
    assert_eq!(cache.get::<Reading>(&key("h")), Some(reading("persisted")));

    clock.advance(Duration::from_secs(3601));
    assert_eq!(cache.get::<Reading>(&key("h")), None);
    assert!(
        !tmp.path().join(format!("{}.json", key("h").as_str())).exists(),
        "expired file should be deleted"
    );
}
