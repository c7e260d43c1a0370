//! Request DTOs for the course API
//!
//! Defines the structure of incoming HTTP request bodies.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::course::{store_precision, NewCourse, DEFAULT_DURATION, DEFAULT_INSTRUCTOR, DEFAULT_LEVEL};
use super::fields::deserialize_optional_timestamp;

/// Request body for course creation (POST /courses)
///
/// Only `name` and `description` are required; everything else falls back
/// to the course defaults. `createdAt` may be RFC 3339, `YYYY-MM-DD` or
/// epoch milliseconds.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub instructor: Option<String>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl CreateCourseRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        let missing = |field: &Option<String>| field.as_deref().map_or(true, str::is_empty);
        if missing(&self.name) || missing(&self.description) {
            return Some("Name and description are required".to_string());
        }
        if let Some(duration) = self.duration {
            if !duration.is_finite() || duration < 0.0 {
                return Some("Duration must be a non-negative number".to_string());
            }
        }
        None
    }

    /// Applies defaults and produces the course to insert.
    ///
    /// Empty optional text fields count as absent. Call `validate` first;
    /// missing required fields become empty strings here.
    pub fn into_new_course(self) -> NewCourse {
        let or_default = |field: Option<String>, default: &str| {
            field
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        NewCourse {
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            instructor: or_default(self.instructor, DEFAULT_INSTRUCTOR),
            duration: self.duration.unwrap_or(DEFAULT_DURATION),
            level: or_default(self.level, DEFAULT_LEVEL),
            created_at: store_precision(self.created_at.unwrap_or_else(Utc::now)),
        }
    }
}
