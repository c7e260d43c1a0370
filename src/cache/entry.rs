//! Cache Entry Module
//!
//! A single in-memory cache slot with its expiry deadline.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// Stored bytes plus the instant they stop being served.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    pub value: Vec<u8>,
    /// When the entry expires
    pub expires_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl` from now.
    pub fn new(value: Vec<u8>, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time reaches its deadline, so a
    /// lookup issued exactly when the TTL elapses is a miss.
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}
