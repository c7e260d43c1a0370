//! Course Resolver
//!
//! Cache-aside lookup of a single course by identifier.
//!
//! A hit is served straight from the cache. A miss reads the store and, if
//! the course exists, writes it back to the cache with a fixed TTL before
//! returning. Absent courses are never cached, and nothing here invalidates
//! an entry: a cached course may lag the store until its TTL runs out.
//!
//! Concurrent misses on the same key are not coalesced; each one reads the
//! store and rewrites the cache.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::cache::{self, CacheGateway};
use crate::error::{Result, ServiceError};
use crate::models::{Course, CourseId};
use crate::store::StoreGateway;

// == Course Resolver ==
/// Resolves courses through the cache, falling back to the store.
#[derive(Clone)]
pub struct CourseResolver {
    cache: Arc<dyn CacheGateway>,
    store: Arc<dyn StoreGateway>,
    ttl: Duration,
}

impl CourseResolver {
    /// Creates a resolver writing cache entries with the given TTL.
    pub fn new(cache: Arc<dyn CacheGateway>, store: Arc<dyn StoreGateway>, ttl: Duration) -> Self {
        Self { cache, store, ttl }
    }

    // == Resolve By Id ==
    /// Fetches a course by its identifier.
    ///
    /// # Errors
    /// - `InvalidIdentifier` if `raw_id` is malformed; neither backend is touched.
    /// - `NotFound` if the store has no such course.
    /// - `Cache`, `Store` or `Serialization` on any backend failure, including
    ///   a failed cache write after a successful store read.
    pub async fn resolve_by_id(&self, raw_id: &str) -> Result<Course> {
        let id = CourseId::parse(raw_id)
            .inspect_err(|_| warn!(id = raw_id, "Rejected malformed course id"))?;
        let key = cache::course_key(&id);

        if let Some(course) = cache::get_cached::<Course>(self.cache.as_ref(), &key).await? {
            return Ok(course);
        }

        let course = match self.store.find_by_id(&id).await? {
            Some(course) => course,
            None => {
                debug!(%id, "Course not found in store");
                return Err(ServiceError::NotFound(id.to_string()));
            }
        };

        cache::cache_value(self.cache.as_ref(), &key, &course, self.ttl).await?;
        Ok(course)
    }
}
