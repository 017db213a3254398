use lru::LruCache;
use std::num::NonZeroUsize;
use std::time::Duration;
use tokio::time::Instant;

use super::ResourceKey;

/// A fetched payload and the moment it was requested.
#[derive(Debug, Clone)]
struct CachedEntry {
    data: serde_json::Value,
    fetched_at: Instant,
}

/// An in-memory cache of reference data with a fixed time-to-live.
///
/// Entries are keyed by resource and considered fresh while younger than
/// `ttl`. Callers pass `now` explicitly so freshness checks are deterministic.
pub struct ResponseCache {
    entries: LruCache<ResourceKey, CachedEntry>,
    ttl: Duration,
}

impl ResponseCache {
    /// Creates a cache holding at most one entry per [`ResourceKey`].
    pub fn new(ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(ResourceKey::ALL.len()).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the cached payload for `key` if it is still fresh at `now`.
    ///
    /// Expired entries are evicted on lookup.
    pub fn get_fresh(&mut self, key: ResourceKey, now: Instant) -> Option<serde_json::Value> {
        let fresh = match self.entries.get(&key) {
            Some(entry) => now.saturating_duration_since(entry.fetched_at) < self.ttl,
            None => return None,
        };

        if fresh {
            self.entries.get(&key).map(|entry| entry.data.clone())
        } else {
            self.entries.pop(&key);
            None
        }
    }

    pub fn insert(&mut self, key: ResourceKey, data: serde_json::Value, fetched_at: Instant) {
        self.entries.put(key, CachedEntry { data, fetched_at });
    }

    /// True if every resource has an entry fresh at `now`.
    pub fn is_complete(&self, now: Instant) -> bool {
        ResourceKey::ALL.iter().all(|key| {
            self.entries
                .peek(key)
                .is_some_and(|entry| now.saturating_duration_since(entry.fetched_at) < self.ttl)
        })
    }

    pub fn invalidate(&mut self, key: ResourceKey) {
        self.entries.pop(&key);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
