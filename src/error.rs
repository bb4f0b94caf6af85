//! Error types for the cache
//!
//! Cache operations never fail; only building a cache from raw configuration can.

use thiserror::Error;

// == Cache Error Enum ==
/// Error produced while turning a [`CacheConfig`](crate::CacheConfig) into a cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Capacity must hold at least one entry
    #[error("Invalid capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
