//! API Module
//!
//! HTTP handlers and routing for the course REST API.
//!
//! # Endpoints
//! - `POST /courses` - Create a course
//! - `GET /courses/:id` - Fetch a course by id
//! - `GET /courses/stats` - Count courses
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
