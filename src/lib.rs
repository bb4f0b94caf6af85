//! ttl_lru - A bounded, thread-safe LRU cache
//!
//! Provides O(1) insertion, lookup and removal with LRU eviction and lazy TTL expiration.
//!
//! ```
//! use std::num::NonZeroUsize;
//! use std::time::Duration;
//! use ttl_lru::Cache;
//!
//! let cache = Cache::new(NonZeroUsize::new(2).unwrap(), Duration::from_secs(100));
//! assert!(cache.add("a", 1));
//! assert!(cache.add("b", 2));
//! assert!(cache.add("c", 3)); // evicts "a"
//!
//! assert!(cache.get("a").is_none());
//! assert_eq!(cache.get("b").as_deref(), Some(&2));
//! assert_eq!(cache.get("c").as_deref(), Some(&3));
//! ```

pub mod cache;
pub mod clock;
pub mod config;
pub mod error;

pub use cache::Cache;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
