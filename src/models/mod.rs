//! Domain and DTO models for the course service
//!
//! `course` holds the entity itself; `requests` and `responses` define the
//! HTTP request and response bodies, and `fields` their serde helpers.

pub mod course;
pub mod fields;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use course::{Course, CourseId, NewCourse};
pub use requests::CreateCourseRequest;
pub use responses::{CourseStatsResponse, CreateCourseResponse, ErrorResponse, HealthResponse};
