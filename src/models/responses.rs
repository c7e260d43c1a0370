//! Response DTOs for the course API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use super::course::CourseId;

/// Response body for course creation (POST /courses)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseResponse {
    /// Success message
    pub message: String,
    /// Identifier assigned by the store
    pub course_id: CourseId,
}

impl CreateCourseResponse {
    /// Creates a new CreateCourseResponse
    pub fn new(course_id: CourseId) -> Self {
        Self {
            message: "Course created successfully".to_string(),
            course_id,
        }
    }
}

/// Response body for the stats endpoint (GET /courses/stats)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseStatsResponse {
    /// Number of courses in the store
    pub total_courses: u64,
}

impl CourseStatsResponse {
    pub fn new(total_courses: u64) -> Self {
        Self { total_courses }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
