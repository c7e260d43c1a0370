//! MongoDB Store Module
//!
//! Store gateway over the `courses` collection.

use async_trait::async_trait;
use mongodb::{
    bson::doc,
    error::{Error as MongoError, ErrorKind},
    Client, Collection,
};
use tracing::debug;

use super::{document::CourseDocument, StoreError, StoreGateway, COURSES_COLLECTION};
use crate::models::{Course, CourseId, NewCourse};

/// Maps driver errors to StoreError.
fn map_mongo_error(err: MongoError) -> StoreError {
    match err.kind.as_ref() {
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(_)
        | ErrorKind::ConnectionPoolCleared { .. } => StoreError::ConnectionFailed(err.to_string()),
        _ => StoreError::OperationFailed(err.to_string()),
    }
}

// == Mongo Store ==
/// MongoDB-backed course store.
///
/// `Client` and `Collection` are pooled handles; clones share connections.
#[derive(Clone)]
pub struct MongoStore {
    client: Client,
    courses: Collection<CourseDocument>,
}

impl MongoStore {
    /// Connects to MongoDB and verifies the deployment answers a `ping`.
    ///
    /// The driver connects lazily, so without the ping an unreachable server
    /// would only surface on the first request.
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await.map_err(map_mongo_error)?;
        let database = client.database(db_name);
        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(map_mongo_error)?;

        Ok(Self {
            courses: database.collection(COURSES_COLLECTION),
            client,
        })
    }

    /// Returns the underlying client, used to close connections on shutdown.
    pub fn client(&self) -> Client {
        self.client.clone()
    }
}

#[async_trait]
impl StoreGateway for MongoStore {
    async fn insert(&self, course: NewCourse) -> Result<CourseId, StoreError> {
        let result = self
            .courses
            .insert_one(CourseDocument::from(&course))
            .await
            .map_err(map_mongo_error)?;

        let oid = result.inserted_id.as_object_id().ok_or_else(|| {
            StoreError::OperationFailed(format!(
                "unexpected inserted id: {}",
                result.inserted_id
            ))
        })?;
        debug!(id = %oid, "Inserted course document");
        Ok(CourseId::from(oid))
    }

    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, StoreError> {
        debug!(%id, "Fetching course document");
        let found = self
            .courses
            .find_one(doc! { "_id": id.as_object_id() })
            .await
            .map_err(map_mongo_error)?;

        match found {
            Some(doc) => Course::try_from(doc).map(Some),
            None => {
                debug!(%id, "No course document found");
                Ok(None)
            }
        }
    }

    async fn count_all(&self) -> Result<u64, StoreError> {
        self.courses
            .count_documents(doc! {})
            .await
            .map_err(map_mongo_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_rejects_malformed_uri() {
        let result = MongoStore::connect("http://not-mongo", "courses_db").await;
        assert!(matches!(result, Err(StoreError::OperationFailed(_))));
    }
}
