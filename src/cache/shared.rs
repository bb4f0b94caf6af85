//! Shared Cache Module
//!
//! Thread-safe handle around a [`CacheStore`].

use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::debug;

use crate::cache::CacheStore;
use crate::clock::{Clock, SystemClock};
use crate::config::CacheConfig;
use crate::error::Result;

// == Cache ==
/// Bounded LRU cache with lazy TTL expiry, safe to share between threads.
///
/// Every operation holds a single lock over the whole store for its full
/// duration, so callers never observe a half-updated index or order. Share
/// it across threads by wrapping it in an [`Arc`].
///
/// Only [`add`](Self::add) refreshes recency; [`get`](Self::get) does not.
pub struct Cache<V, C = SystemClock> {
    store: Mutex<CacheStore<V, C>>,
}

impl<V> Cache<V, SystemClock> {
    // == Constructor ==
    /// Creates an empty cache using the system monotonic clock.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries
    /// * `ttl` - Maximum entry age; `Duration::ZERO` disables expiry
    pub fn new(capacity: NonZeroUsize, ttl: Duration) -> Self {
        Self::with_clock(capacity, ttl, SystemClock)
    }

    /// Creates an empty cache from raw configuration values.
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        let capacity = config.validate()?;
        Ok(Self::new(capacity, config.ttl()))
    }
}

impl<V, C: Clock> Cache<V, C> {
    /// Creates an empty cache that reads time from `clock`.
    pub fn with_clock(capacity: NonZeroUsize, ttl: Duration, clock: C) -> Self {
        debug!(
            capacity = capacity.get(),
            ttl = ?ttl,
            "Cache initialized"
        );
        Self {
            store: Mutex::new(CacheStore::new(capacity, ttl, clock)),
        }
    }

    // == Add ==
    /// Inserts `value` under `key`, returning true if the key was new.
    ///
    /// Re-adding an existing key keeps the stored value and its insertion time,
    /// only marking the entry as most recently used.
    pub fn add(&self, key: impl Into<String>, value: V) -> bool {
        self.store.lock().add(key.into(), value)
    }

    // == Get ==
    /// Returns the value under `key`, or None if missing or expired.
    pub fn get(&self, key: &str) -> Option<Arc<V>> {
        self.store.lock().get(key)
    }

    // == Remove ==
    /// Removes `key`, returning true if it was present.
    pub fn remove(&self, key: &str) -> bool {
        self.store.lock().remove(key)
    }

    /// Returns true if `key` is present and not expired.
    pub fn contains(&self, key: &str) -> bool {
        self.store.lock().contains(key)
    }

    /// Drops every entry.
    pub fn clear(&self) {
        self.store.lock().clear();
    }

    /// Snapshot of all keys, most recently used first. Expired entries are included.
    pub fn keys(&self) -> Vec<String> {
        self.store.lock().keys()
    }

    /// Number of stored entries. Expired entries count until they are evicted or removed.
    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }

    pub fn capacity(&self) -> NonZeroUsize {
        self.store.lock().capacity()
    }

    pub fn ttl(&self) -> Duration {
        self.store.lock().ttl()
    }
}

impl<V, C: Clock> fmt::Debug for Cache<V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let store = self.store.lock();
        f.debug_struct("Cache")
            .field("capacity", &store.capacity())
            .field("ttl", &store.ttl())
            .field("len", &store.len())
            .finish()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use std::thread;

    fn cap(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_cache_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Cache<String>>();
        assert_send_sync::<Cache<Vec<u8>, ManualClock>>();
    }

    #[test]
    fn test_cache_basic_operations() {
        let cache = Cache::new(cap(10), Duration::from_secs(60));

        assert!(cache.add("key1", 1));
        assert!(!cache.add("key1", 2));
        assert_eq!(cache.get("key1").as_deref(), Some(&1));
        assert!(cache.contains("key1"));
        assert_eq!(cache.len(), 1);

        assert!(cache.remove("key1"));
        assert!(!cache.remove("key1"));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_returns_shared_value() {
        let cache = Cache::new(cap(10), Duration::ZERO);
        cache.add("key1", vec![1u8, 2, 3]);

        let first = cache.get("key1").unwrap();
        let second = cache.get("key1").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_cache_value_outlives_removal() {
        let cache = Cache::new(cap(10), Duration::ZERO);
        cache.add("key1", "value".to_string());

        let held = cache.get("key1").unwrap();
        cache.remove("key1");

        assert_eq!(held.as_str(), "value");
    }

    #[test]
    fn test_cache_ttl_with_manual_clock() {
        let clock = ManualClock::new();
        let cache = Cache::with_clock(cap(10), Duration::from_secs(1), clock.clone());

        cache.add("key1", "value1");
        assert!(cache.get("key1").is_some());

        clock.advance(Duration::from_millis(1001));
        assert!(cache.get("key1").is_none());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_from_config() {
        let cache: Cache<u32> = Cache::from_config(&CacheConfig::new(5, 30)).unwrap();
        assert_eq!(cache.capacity(), cap(5));
        assert_eq!(cache.ttl(), Duration::from_secs(30));

        assert!(Cache::<u32>::from_config(&CacheConfig::new(0, 30)).is_err());
    }

    #[test]
    fn test_cache_debug_output() {
        let cache = Cache::new(cap(3), Duration::from_secs(1));
        cache.add("a", ());
        let out = format!("{:?}", cache);
        assert!(out.contains("capacity: 3"));
        assert!(out.contains("len: 1"));
    }

    /// Collects formatted log output for assertions.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn init_log(ttl: Duration) -> String {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            Cache::<u8>::new(cap(2), ttl);
        });

        let bytes = buffer.0.lock().clone();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    #[test]
    fn test_cache_init_log_keeps_subsecond_ttl() {
        let subsecond = init_log(Duration::from_millis(500));
        assert!(subsecond.contains("ttl=500ms"), "unexpected log: {}", subsecond);

        let disabled = init_log(Duration::ZERO);
        assert!(disabled.contains("ttl=0ns"), "unexpected log: {}", disabled);
    }

    #[test]
    fn test_cache_debug_output_subsecond_ttl() {
        let cache = Cache::<u8>::new(cap(2), Duration::from_millis(500));
        assert!(format!("{:?}", cache).contains("ttl: 500ms"));
    }

    #[test]
    fn test_cache_concurrent_distinct_keys() {
        let cache = Arc::new(Cache::new(cap(1000), Duration::ZERO));

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    for i in 0..100 {
                        assert!(cache.add(format!("t{}-{}", t, i), i));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cache.len(), 400);
        assert_eq!(cache.get("t3-99").as_deref(), Some(&99));
    }
}
