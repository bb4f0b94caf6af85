//! Cache Module
//!
//! Provides in-memory caching with LRU eviction and lazy TTL expiration.

mod entry;
mod lru;
mod shared;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use lru::RecencyList;
pub use shared::Cache;
pub use store::CacheStore;
