//! In-Memory Store Module
//!
//! Process-local stand-in for the document store. Counts lookups so callers
//! can assert how often the source of truth was consulted.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{StoreError, StoreGateway};
use crate::models::{Course, CourseId, NewCourse};

#[derive(Debug, Default)]
struct Inner {
    courses: HashMap<CourseId, Course>,
    reads: u64,
    inserts: u64,
}

/// HashMap-backed course store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `find_by_id` calls served so far.
    pub async fn reads(&self) -> u64 {
        self.inner.read().await.reads
    }

    /// Number of `insert` calls served so far.
    pub async fn inserts(&self) -> u64 {
        self.inner.read().await.inserts
    }

    /// Replaces a stored course in place, bypassing any cache.
    pub async fn replace(&self, course: Course) {
        self.inner.write().await.courses.insert(course.id, course);
    }
}

#[async_trait]
impl StoreGateway for MemoryStore {
    async fn insert(&self, course: NewCourse) -> Result<CourseId, StoreError> {
        let id = CourseId::new();
        let mut inner = self.inner.write().await;
        inner.courses.insert(id, course.into_course(id));
        inner.inserts += 1;
        Ok(id)
    }

    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, StoreError> {
        let mut inner = self.inner.write().await;
        inner.reads += 1;
        Ok(inner.courses.get(id).cloned())
    }

    async fn count_all(&self) -> Result<u64, StoreError> {
        Ok(self.inner.read().await.courses.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_assigns_id() {
        let store = MemoryStore::new();

        let first = store.insert(NewCourse::new("Go", "Intro")).await.unwrap();
        let second = store.insert(NewCourse::new("Go", "Intro")).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(store.count_all().await.unwrap(), 2);
        assert_eq!(store.inserts().await, 2);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let store = MemoryStore::new();
        let new = NewCourse::new("Go Basics", "Intro");
        let id = store.insert(new.clone()).await.unwrap();

        let found = store.find_by_id(&id).await.unwrap();
        assert_eq!(found, Some(new.into_course(id)));
        assert_eq!(store.reads().await, 1);
    }

    #[tokio::test]
    async fn test_find_absent() {
        let store = MemoryStore::new();

        assert!(store.find_by_id(&CourseId::new()).await.unwrap().is_none());
        assert_eq!(store.count_all().await.unwrap(), 0);
    }
}
