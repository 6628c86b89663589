//! Thread-safe handle serializing access to a cache.

use std::hash::Hash;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::cache::LruCache;
use crate::stats::CacheStats;

/// Cloneable, thread-safe wrapper around [`LruCache`].
///
/// Every operation holds one exclusive lock for its full duration. `get`
/// takes it too: a hit reorders the recency list, so no operation is a
/// pure read. Operations from concurrent threads are totally ordered by
/// lock acquisition.
///
/// Clones share the same cache and statistics, so one instance created at
/// startup and cloned into consumers acts as the process-wide cache.
pub struct SharedCache<K, V> {
    inner: Arc<Mutex<LruCache<K, V>>>,
    stats: Arc<CacheStats>,
}

impl<K, V> Clone for SharedCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            stats: Arc::clone(&self.stats),
        }
    }
}

impl<K, V> SharedCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Create a shared cache holding at most `capacity` entries.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries; zero stores nothing
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(LruCache::new(capacity))),
            stats: Arc::new(CacheStats::new()),
        }
    }

    /// Look up a key, refreshing its recency on a hit.
    ///
    /// Returns a clone of the stored value; no reference into the cache
    /// escapes the lock.
    pub fn get(&self, key: &K) -> Option<V> {
        let mut cache = self.inner.lock();
        match cache.get(key) {
            Some(value) => {
                let value = value.clone();
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Insert or replace a value, returning the pair evicted to make room.
    pub fn put(&self, key: K, value: V) -> Option<(K, V)> {
        let mut cache = self.inner.lock();
        let present = cache.contains(&key);
        let evicted = cache.put(key, value);
        if !present && cache.capacity() > 0 {
            self.stats.record_insertion();
        }
        if evicted.is_some() {
            self.stats.record_eviction();
        }
        evicted
    }

    /// Remove an entry, returning its value if the key was present.
    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.lock().remove(key)
    }

    /// Check for a key without touching recency order.
    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().contains(key)
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Maximum number of entries the cache will hold.
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Drop every entry and zero the statistics.
    pub fn clear(&self) {
        self.inner.lock().clear();
        self.stats.reset();
    }

    /// Change the capacity, evicting least-recently-used entries until the
    /// new bound holds.
    pub fn resize(&self, capacity: usize) {
        self.inner.lock().resize(capacity);
    }

    /// Traffic counters shared by all clones.
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}
