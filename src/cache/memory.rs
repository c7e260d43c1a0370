//! In-Memory Cache Module
//!
//! Process-local cache gateway with lazy TTL expiry, used in place of Redis
//! by the test suite.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::entry::CacheEntry;
use super::{CacheError, CacheGateway, CacheStats};

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, CacheEntry>,
    stats: CacheStats,
}

// == Memory Cache ==
/// HashMap-backed cache with per-entry expiry and call counters.
#[derive(Debug, Default)]
pub struct MemoryCache {
    inner: RwLock<Inner>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the hit/miss/write counters.
    pub async fn stats(&self) -> CacheStats {
        self.inner.read().await.stats.clone()
    }

    /// Number of stored entries, expired ones included until they are read.
    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl CacheGateway for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let mut guard = self.inner.write().await;
        let inner = &mut *guard;

        match inner.entries.get(key) {
            Some(entry) if !entry.is_expired() => {
                let value = entry.value.clone();
                inner.stats.record_hit();
                Ok(Some(value))
            }
            Some(_) => {
                inner.entries.remove(key);
                inner.stats.record_miss();
                Ok(None)
            }
            None => {
                inner.stats.record_miss();
                Ok(None)
            }
        }
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Duration) -> Result<(), CacheError> {
        let mut inner = self.inner.write().await;
        inner
            .entries
            .insert(key.to_string(), CacheEntry::new(value.to_vec(), ttl));
        inner.stats.record_write();
        Ok(())
    }
}
