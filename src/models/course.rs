//! Course Entity Module
//!
//! The course resource, its store-assigned identifier and the validated
//! input used to create one.

use std::fmt;

use chrono::{DateTime, SubsecRound, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::fields::serialize_duration;
use crate::error::{Result, ServiceError};

// == Defaults ==
/// Instructor recorded when the request omits one.
pub const DEFAULT_INSTRUCTOR: &str = "Unknown";

/// Level recorded when the request omits one.
pub const DEFAULT_LEVEL: &str = "Beginner";

/// Duration recorded when the request omits one.
pub const DEFAULT_DURATION: f64 = 0.0;

// == Course Id ==
/// Store-assigned course identifier.
///
/// Wraps a 12-byte ObjectId and is rendered as 24 lowercase hex characters,
/// both in URLs and in JSON bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CourseId(ObjectId);

impl CourseId {
    /// Generates a fresh identifier.
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    /// Parses an identifier from its hex form.
    ///
    /// Anything other than exactly 24 hex characters is rejected with
    /// `ServiceError::InvalidIdentifier`. That includes 12-character strings,
    /// which some drivers accept as raw ObjectId bytes.
    pub fn parse(raw: &str) -> Result<Self> {
        ObjectId::parse_str(raw)
            .map(Self)
            .map_err(|_| ServiceError::InvalidIdentifier(raw.to_string()))
    }

    /// Returns the underlying ObjectId.
    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl Default for CourseId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ObjectId> for CourseId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

impl Serialize for CourseId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_hex())
    }
}

impl<'de> Deserialize<'de> for CourseId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ObjectId::parse_str(&raw)
            .map(Self)
            .map_err(|_| de::Error::custom(format!("invalid course id: {raw}")))
    }
}

// == Course ==
/// A course as stored and as returned to callers.
///
/// The same JSON shape is used for HTTP responses and for cache payloads, so
/// a cached course and a freshly loaded one are indistinguishable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(rename = "_id")]
    pub id: CourseId,
    pub name: String,
    pub description: String,
    pub instructor: String,
    /// Length of the course, never negative; may be fractional.
    #[serde(serialize_with = "serialize_duration")]
    pub duration: f64,
    pub level: String,
    pub created_at: DateTime<Utc>,
}

// == New Course ==
/// A validated course that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCourse {
    pub name: String,
    pub description: String,
    pub instructor: String,
    pub duration: f64,
    pub level: String,
    pub created_at: DateTime<Utc>,
}

impl NewCourse {
    /// Creates a course with default instructor, duration and level,
    /// timestamped now.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            instructor: DEFAULT_INSTRUCTOR.to_string(),
            duration: DEFAULT_DURATION,
            level: DEFAULT_LEVEL.to_string(),
            created_at: store_precision(Utc::now()),
        }
    }

    /// Attaches the identifier handed out by the store.
    pub fn into_course(self, id: CourseId) -> Course {
        Course {
            id,
            name: self.name,
            description: self.description,
            instructor: self.instructor,
            duration: self.duration,
            level: self.level,
            created_at: self.created_at,
        }
    }
}

/// Truncates a timestamp to the millisecond resolution the document store keeps.
pub fn store_precision(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.trunc_subsecs(3)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_course_id_parse_valid() {
        let id = CourseId::parse("65a1b2c3d4e5f60718293a4b").unwrap();
        assert_eq!(id.to_string(), "65a1b2c3d4e5f60718293a4b");
    }

    #[test]
    fn test_course_id_parse_rejects_malformed() {
        for raw in [
            "",
            "not-a-valid-id",
            "65a1b2c3d4e5f60718293a4",
            "65a1b2c3d4e5f60718293a4bz",
            "twelve-chars",
        ] {
            assert!(
                matches!(CourseId::parse(raw), Err(ServiceError::InvalidIdentifier(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_new_course_defaults() {
        let course = NewCourse::new("Go Basics", "Intro");
        assert_eq!(course.instructor, "Unknown");
        assert_eq!(course.duration, 0.0);
        assert_eq!(course.level, "Beginner");
        assert_eq!(course.created_at.timestamp_subsec_nanos() % 1_000_000, 0);
    }

    #[test]
    fn test_course_json_shape() {
        let id = CourseId::parse("65a1b2c3d4e5f60718293a4b").unwrap();
        let created_at = Utc.with_ymd_and_hms(2024, 1, 12, 9, 30, 0).unwrap();
        let course = NewCourse {
            created_at,
            ..NewCourse::new("Rust", "Ownership")
        }
        .into_course(id);

        let json: serde_json::Value = serde_json::to_value(&course).unwrap();
        assert_eq!(json["_id"], "65a1b2c3d4e5f60718293a4b");
        assert_eq!(json["createdAt"], "2024-01-12T09:30:00Z");
        assert_eq!(json["instructor"], "Unknown");
        assert_eq!(json["duration"], 0);
    }

    #[test]
    fn test_course_json_fractional_duration() {
        let course = NewCourse {
            duration: 1.5,
            ..NewCourse::new("Rust", "Ownership")
        }
        .into_course(CourseId::new());

        let json: serde_json::Value = serde_json::to_value(&course).unwrap();
        assert_eq!(json["duration"], 1.5);

        let decoded: Course = serde_json::from_value(json).unwrap();
        assert_eq!(decoded.duration, 1.5);
    }

    #[test]
    fn test_course_json_keeps_timestamp_type() {
        let course = NewCourse::new("Rust", "Ownership").into_course(CourseId::new());
        let bytes = serde_json::to_vec(&course).unwrap();
        let decoded: Course = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded.created_at, course.created_at);
        assert_eq!(decoded, course);
    }
}
