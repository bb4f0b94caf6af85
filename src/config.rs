//! Configuration Module
//!
//! Raw cache parameters as an embedding application would load them, plus
//! validation into a ready [`Cache`].

use std::num::NonZeroUsize;
use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use crate::cache::Cache;
use crate::error::{CacheError, Result};

/// Cache configuration parameters.
///
/// Missing fields fall back to the defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
    /// Maximum entry age in seconds, 0 = entries never expire
    pub ttl_seconds: u64,
}

impl CacheConfig {
    /// Creates a config from raw values. Nothing is checked until [`validate`](Self::validate).
    pub fn new(capacity: usize, ttl_seconds: u64) -> Self {
        Self {
            capacity,
            ttl_seconds,
        }
    }

    /// Checks the capacity and returns it in its non-zero form.
    pub fn validate(&self) -> Result<NonZeroUsize> {
        NonZeroUsize::new(self.capacity).ok_or_else(|| {
            warn!("Rejected cache configuration: capacity must be at least 1");
            CacheError::InvalidCapacity(self.capacity)
        })
    }

    /// Returns the TTL as a [`Duration`].
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }

    /// Validates the config and builds an empty cache from it.
    pub fn build<V>(&self) -> Result<Cache<V>> {
        Cache::from_config(self)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: 1000,
            ttl_seconds: 300,
        }
    }
}
