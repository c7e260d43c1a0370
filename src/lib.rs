//! Course Service - course catalogue over HTTP
//!
//! Courses live in MongoDB; single-course lookups go through a Redis
//! read-through cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;

pub use api::AppState;
pub use config::Config;
pub use service::CourseResolver;
