//! BSON shape of a course in the `courses` collection.

use chrono::{DateTime, Utc};
use mongodb::bson::{self, oid::ObjectId};
use serde::{Deserialize, Serialize};

use super::StoreError;
use crate::models::{Course, NewCourse};

/// Course document as persisted.
///
/// `createdAt` is a native BSON datetime (millisecond precision) so the
/// collection stays queryable by date. `duration` is written as a double;
/// int32 and int64 values left by other writers read back as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub description: String,
    pub instructor: String,
    pub duration: f64,
    pub level: String,
    pub created_at: bson::DateTime,
}

impl From<&NewCourse> for CourseDocument {
    fn from(course: &NewCourse) -> Self {
        Self {
            id: None,
            name: course.name.clone(),
            description: course.description.clone(),
            instructor: course.instructor.clone(),
            duration: course.duration,
            level: course.level.clone(),
            created_at: bson::DateTime::from_millis(course.created_at.timestamp_millis()),
        }
    }
}

impl TryFrom<CourseDocument> for Course {
    type Error = StoreError;

    fn try_from(doc: CourseDocument) -> Result<Self, Self::Error> {
        let id = doc
            .id
            .ok_or_else(|| StoreError::CorruptDocument("missing _id".to_string()))?;
        if !doc.duration.is_finite() || doc.duration < 0.0 {
            return Err(StoreError::CorruptDocument(format!(
                "{id}: duration {} out of range",
                doc.duration
            )));
        }
        let created_at = DateTime::<Utc>::from_timestamp_millis(doc.created_at.timestamp_millis())
            .ok_or_else(|| StoreError::CorruptDocument(format!("{id}: createdAt out of range")))?;

        Ok(Course {
            id: id.into(),
            name: doc.name,
            description: doc.description,
            instructor: doc.instructor,
            duration: doc.duration,
            level: doc.level,
            created_at,
        })
    }
}
