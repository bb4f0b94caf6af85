//! Cache Store Module
//!
//! Main cache engine combining a key index with recency ordering and TTL expiration.
//! Not synchronized; [`Cache`](crate::Cache) puts it behind a lock.

use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, trace};

use crate::cache::{CacheEntry, RecencyList};
use crate::clock::Clock;

// == Cache Store ==
/// Cache storage with LRU eviction and lazy TTL expiry.
#[derive(Debug)]
pub struct CacheStore<V, C> {
    /// Key to slot handle in `order`
    index: HashMap<String, usize>,
    /// Entries, most recently used first
    order: RecencyList<CacheEntry<V>>,
    /// Maximum number of entries allowed
    capacity: NonZeroUsize,
    /// Maximum entry age, zero = never expire
    ttl: Duration,
    clock: C,
}

impl<V, C: Clock> CacheStore<V, C> {
    // == Constructor ==
    /// Creates an empty store.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries the store can hold
    /// * `ttl` - Maximum entry age; `Duration::ZERO` disables expiry
    /// * `clock` - Time source used to stamp and age entries
    pub fn new(capacity: NonZeroUsize, ttl: Duration, clock: C) -> Self {
        Self {
            index: HashMap::with_capacity(capacity.get()),
            order: RecencyList::with_capacity(capacity.get()),
            capacity,
            ttl,
            clock,
        }
    }

    // == Add ==
    /// Inserts `value` under `key` if the key is new.
    ///
    /// An existing key is only moved to the front: its value and insertion
    /// time are kept and `false` is returned. A new key that pushes the store
    /// past capacity evicts the least recently used entry.
    pub fn add(&mut self, key: String, value: V) -> bool {
        if let Some(&idx) = self.index.get(&key) {
            self.order.move_to_front(idx);
            trace!(key = %key, "Touched existing cache entry");
            return false;
        }

        let entry = CacheEntry::new(key.clone(), value, self.clock.now());
        let idx = self.order.push_front(entry);
        self.index.insert(key, idx);

        if self.order.len() > self.capacity.get() {
            self.evict_oldest();
        }
        true
    }

    // == Get ==
    /// Retrieves the value under `key`.
    ///
    /// Expired entries read as absent but stay in place. Neither hits nor
    /// misses change recency order.
    pub fn get(&self, key: &str) -> Option<Arc<V>> {
        let entry = self.live_entry(key)?;
        Some(Arc::clone(&entry.value))
    }

    // == Contains ==
    /// Returns true if `key` is present and not expired.
    pub fn contains(&self, key: &str) -> bool {
        self.live_entry(key).is_some()
    }

    // == Remove ==
    /// Removes the entry under `key`, returning whether one existed.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.index.remove(key) {
            Some(idx) => {
                self.order.remove(idx);
                debug!(key = %key, "Removed cache entry");
                true
            }
            None => false,
        }
    }

    // == Clear ==
    /// Drops every entry.
    pub fn clear(&mut self) {
        self.index.clear();
        self.order.clear();
    }

    // == Keys ==
    /// Returns all keys, most recently used first. Expired entries are included.
    pub fn keys(&self) -> Vec<String> {
        self.order.iter().map(|entry| entry.key.clone()).collect()
    }

    // == Length ==
    /// Returns the number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // --- Internals ---

    fn live_entry(&self, key: &str) -> Option<&CacheEntry<V>> {
        let idx = *self.index.get(key)?;
        let entry = self.order.get(idx)?;
        if entry.is_expired(self.ttl, self.clock.now()) {
            trace!(key = %key, "Cache entry expired");
            return None;
        }
        Some(entry)
    }

    fn evict_oldest(&mut self) {
        if let Some(evicted) = self.order.pop_back() {
            self.index.remove(&evicted.key);
            debug!(key = %evicted.key, "Evicted least recently used entry");
        }
    }
}
