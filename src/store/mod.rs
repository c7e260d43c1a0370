//! Store Module
//!
//! Gateway to the document collection that is the source of truth for
//! courses. No caching happens at this layer.

pub mod document;
mod memory;
mod mongo;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Course, CourseId, NewCourse};

pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// Collection holding course documents
pub const COURSES_COLLECTION: &str = "courses";

// == Store Error ==
/// Failure talking to the document store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Store unreachable or connection lost
    #[error("Store connection failed: {0}")]
    ConnectionFailed(String),

    /// Store rejected or failed the operation
    #[error("Store operation failed: {0}")]
    OperationFailed(String),

    /// A stored document does not decode into a course
    #[error("Corrupt course document: {0}")]
    CorruptDocument(String),
}

// == Store Gateway ==
/// Identifier-keyed access to the course collection.
#[async_trait]
pub trait StoreGateway: Send + Sync {
    /// Inserts a course and returns the identifier the store assigned.
    async fn insert(&self, course: NewCourse) -> Result<CourseId, StoreError>;

    /// Loads a course, `None` if no document has this identifier.
    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, StoreError>;

    /// Counts all courses.
    async fn count_all(&self) -> Result<u64, StoreError>;
}
