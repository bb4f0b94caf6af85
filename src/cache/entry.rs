//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::sync::Arc;
use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached record.
#[derive(Debug)]
pub struct CacheEntry<V> {
    /// Unique key, also kept here so an evicted tail can be unindexed
    pub key: String,
    /// The stored value, shared with readers
    pub value: Arc<V>,
    /// Instant of first insertion, never refreshed
    pub inserted_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry stamped with `now`.
    pub fn new(key: String, value: V, now: Instant) -> Self {
        Self {
            key,
            value: Arc::new(value),
            inserted_at: now,
        }
    }

    // == Age ==
    /// Returns how long ago the entry was inserted.
    ///
    /// Saturates to zero if `now` is earlier than the insertion instant.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.inserted_at)
    }

    // == Is Expired ==
    /// Checks if the entry has outlived `ttl`.
    ///
    /// Boundary condition: the entry is expired only once its age is strictly
    /// greater than `ttl`, so an entry read at exactly `ttl` is still live.
    /// A zero `ttl` means entries never expire.
    pub fn is_expired(&self, ttl: Duration, now: Instant) -> bool {
        !ttl.is_zero() && self.age(now) > ttl
    }
}
