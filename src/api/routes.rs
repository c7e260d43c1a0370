//! API Routes
//!
//! Configures the Axum router with all course endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    course_stats_handler, create_course_handler, get_course_handler, health_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /courses` - Create a course
/// - `GET /courses/stats` - Count courses
/// - `GET /courses/:id` - Fetch a course through the cache
/// - `GET /health` - Health check endpoint
///
/// `/courses/stats` is a static segment and wins over the `:id` capture.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/courses", post(create_course_handler))
        .route("/courses/stats", get(course_stats_handler))
        .route("/courses/:id", get(get_course_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
