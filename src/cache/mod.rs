//! Cache Module
//!
//! Key-value cache gateway used by the course read path. Entries carry a
//! TTL and expire inside the backend; nothing here deletes them.

mod entry;
mod memory;
mod redis_impl;
mod stats;

use std::time::Duration;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::error::Result;
use crate::models::CourseId;

// Re-export public types
pub use memory::MemoryCache;
pub use redis_impl::RedisCache;
pub use stats::CacheStats;

// == Public Constants ==
/// Prefix of every course cache key
pub const COURSE_KEY_PREFIX: &str = "course:";

/// Default lifetime of a cached course
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

// == Cache Error ==
/// Failure talking to the cache backend.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Backend unreachable, refused or dropped the connection
    #[error("Cache connection failed: {0}")]
    ConnectionFailed(String),

    /// Backend answered with an error
    #[error("Cache operation failed: {0}")]
    OperationFailed(String),
}

// == Cache Gateway ==
/// Byte-oriented get/set against a cache with expiry.
#[async_trait]
pub trait CacheGateway: Send + Sync {
    /// Returns the stored bytes, or `None` if the key is absent or expired.
    async fn get(&self, key: &str) -> std::result::Result<Option<Vec<u8>>, CacheError>;

    /// Stores bytes under `key`, expiring after `ttl`.
    async fn set(&self, key: &str, value: &[u8], ttl: Duration)
        -> std::result::Result<(), CacheError>;
}

/// Builds the cache key for a course.
pub fn course_key(id: &CourseId) -> String {
    format!("{COURSE_KEY_PREFIX}{id}")
}

/// Reads and decodes a JSON value from the cache.
///
/// Returns `Ok(None)` on a miss. An undecodable payload is an error.
pub async fn get_cached<T: DeserializeOwned>(
    cache: &dyn CacheGateway,
    key: &str,
) -> Result<Option<T>> {
    match cache.get(key).await? {
        Some(bytes) => {
            debug!(key, "Cache hit");
            Ok(Some(serde_json::from_slice(&bytes)?))
        }
        None => {
            debug!(key, "Cache miss");
            Ok(None)
        }
    }
}

/// Encodes a value as JSON and writes it to the cache with the given TTL.
pub async fn cache_value<T: Serialize>(
    cache: &dyn CacheGateway,
    key: &str,
    value: &T,
    ttl: Duration,
) -> Result<()> {
    let payload = serde_json::to_vec(value)?;
    cache.set(key, &payload, ttl).await?;
    debug!(key, ttl_secs = ttl.as_secs(), "Data cached");
    Ok(())
}
