//! LRU cache engine combining the key index with the access-order list.

use std::collections::HashMap;
use std::hash::Hash;

use ahash::RandomState;
use tracing::{debug, trace};

use crate::list::{ArenaList, Handle};

/// Bounded cache evicting the least-recently-used entry at capacity.
///
/// Lookups go through a hash index that stores a stable handle into the
/// entry arena, so `get`, `put` and `remove` are all O(1). The index and
/// the order list always agree: a key is indexed exactly when its entry
/// is linked.
pub struct LruCache<K, V> {
    index: HashMap<K, Handle, RandomState>,
    entries: ArenaList<K, V>,
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a cache holding at most `capacity` entries.
    ///
    /// A capacity of zero is a valid degenerate cache that stores nothing.
    pub fn new(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            entries: ArenaList::with_capacity(capacity),
            capacity,
        }
    }

    /// Get a value and mark its entry most-recently-used.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let handle = *self.index.get(key)?;
        self.entries.move_to_front(handle);
        self.entries.value(handle)
    }

    /// Get a value without touching recency order.
    pub fn peek(&self, key: &K) -> Option<&V> {
        let handle = *self.index.get(key)?;
        self.entries.value(handle)
    }

    /// Insert or replace a value, marking the entry most-recently-used.
    ///
    /// Inserting a new key at capacity evicts the least-recently-used
    /// entry first and returns the displaced pair so callers can run
    /// cleanup on it. Replacing an existing key never evicts. With a
    /// capacity of zero nothing is ever stored.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&handle) = self.index.get(&key) {
            if let Some(slot) = self.entries.value_mut(handle) {
                *slot = value;
            }
            self.entries.move_to_front(handle);
            return None;
        }

        if self.capacity == 0 {
            return None;
        }

        let evicted = if self.index.len() >= self.capacity {
            self.evict_one()
        } else {
            None
        };

        let handle = self.entries.push_front(key.clone(), value);
        self.index.insert(key, handle);
        debug_assert_eq!(self.index.len(), self.entries.len());
        evicted
    }

    /// Remove an entry, returning its value if the key was present.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let handle = self.index.remove(key)?;
        self.entries.remove(handle).map(|(_, value)| value)
    }

    /// Check for a key without touching recency order.
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Maximum number of entries the cache will hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every entry, keeping the configured capacity.
    pub fn clear(&mut self) {
        self.index.clear();
        self.entries.clear();
    }

    /// Change the capacity, evicting least-recently-used entries until the
    /// new bound holds.
    pub fn resize(&mut self, capacity: usize) {
        while self.index.len() > capacity {
            self.evict_one();
        }
        debug!(capacity, len = self.index.len(), "cache resized");
        self.capacity = capacity;
    }

    fn evict_one(&mut self) -> Option<(K, V)> {
        let (key, value) = self.entries.pop_back()?;
        self.index.remove(&key);
        trace!("evicted least-recently-used entry");
        Some((key, value))
    }
}
