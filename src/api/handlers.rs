//! API Handlers
//!
//! HTTP request handlers for each course endpoint.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::cache::CacheGateway;
use crate::error::{Result, ServiceError};
use crate::models::{
    Course, CourseStatsResponse, CreateCourseRequest, CreateCourseResponse, HealthResponse,
};
use crate::service::CourseResolver;
use crate::store::StoreGateway;

/// Application state shared across all handlers.
///
/// Holds the gateway handles built at startup; every field is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Cache-aside lookup of single courses
    pub resolver: CourseResolver,
    /// Direct store access for writes and aggregates
    pub store: Arc<dyn StoreGateway>,
}

impl AppState {
    /// Creates a new AppState around the given gateways.
    pub fn new(cache: Arc<dyn CacheGateway>, store: Arc<dyn StoreGateway>, ttl: Duration) -> Self {
        Self {
            resolver: CourseResolver::new(cache, store.clone(), ttl),
            store,
        }
    }
}

/// Handler for POST /courses
///
/// Validates the body, applies defaults and inserts the course. The cache is
/// left untouched.
pub async fn create_course_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateCourseRequest>,
) -> Result<(StatusCode, Json<CreateCourseResponse>)> {
    if let Some(error_msg) = req.validate() {
        return Err(ServiceError::InvalidRequest(error_msg));
    }

    let id = state.store.insert(req.into_new_course()).await?;
    info!(%id, "Course created");

    Ok((StatusCode::CREATED, Json(CreateCourseResponse::new(id))))
}

/// Handler for GET /courses/:id
pub async fn get_course_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Course>> {
    let course = state.resolver.resolve_by_id(&id).await?;
    Ok(Json(course))
}

/// Handler for GET /courses/stats
pub async fn course_stats_handler(
    State(state): State<AppState>,
) -> Result<Json<CourseStatsResponse>> {
    let total = state.store.count_all().await?;
    Ok(Json(CourseStatsResponse::new(total)))
}

/// Handler for GET /health
///
/// Liveness only; no backend is contacted.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;
    use crate::cache::{MemoryCache, DEFAULT_TTL};
    use crate::store::MemoryStore;

    fn test_state() -> (AppState, Arc<MemoryCache>, Arc<MemoryStore>) {
        let cache = Arc::new(MemoryCache::new());
        let store = Arc::new(MemoryStore::new());
        let state = AppState::new(cache.clone(), store.clone(), DEFAULT_TTL);
        (state, cache, store)
    }

    fn go_basics() -> CreateCourseRequest {
        CreateCourseRequest {
            name: Some("Go Basics".to_string()),
            description: Some("Intro".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_and_get_handler() {
        let (state, _cache, _store) = test_state();

        let (status, created) = create_course_handler(State(state.clone()), Json(go_basics()))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let course = get_course_handler(State(state), Path(created.course_id.to_string()))
            .await
            .unwrap();
        assert_eq!(course.name, "Go Basics");
        assert_eq!(course.instructor, "Unknown");
    }

    #[tokio::test]
    async fn test_create_does_not_touch_cache() {
        let (state, cache, store) = test_state();

        create_course_handler(State(state), Json(go_basics()))
            .await
            .unwrap();

        assert_eq!(store.inserts().await, 1);
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_create_invalid_request() {
        let (state, _cache, store) = test_state();

        let req = CreateCourseRequest {
            name: Some("Go Basics".to_string()),
            ..Default::default()
        };
        let result = create_course_handler(State(state), Json(req)).await;

        assert!(matches!(result, Err(ServiceError::InvalidRequest(_))));
        assert_eq!(store.inserts().await, 0);
    }

    #[tokio::test]
    async fn test_create_fractional_duration() {
        let (state, _cache, _store) = test_state();

        let req = CreateCourseRequest {
            duration: Some(1.5),
            ..go_basics()
        };
        let (status, created) = create_course_handler(State(state.clone()), Json(req))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let course = get_course_handler(State(state), Path(created.course_id.to_string()))
            .await
            .unwrap();
        assert_eq!(course.duration, 1.5);
    }

    #[tokio::test]
    async fn test_create_negative_duration_rejected() {
        let (state, _cache, store) = test_state();

        let req = CreateCourseRequest {
            duration: Some(-30.0),
            ..go_basics()
        };
        let err = create_course_handler(State(state), Json(req))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidRequest(_)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(store.inserts().await, 0);
    }

    #[tokio::test]
    async fn test_get_nonexistent_course() {
        let (state, _cache, _store) = test_state();

        let id = crate::models::CourseId::new().to_string();
        let result = get_course_handler(State(state), Path(id)).await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let (state, _cache, _store) = test_state();

        let response = course_stats_handler(State(state.clone())).await.unwrap();
        assert_eq!(response.total_courses, 0);

        create_course_handler(State(state.clone()), Json(go_basics()))
            .await
            .unwrap();
        let response = course_stats_handler(State(state)).await.unwrap();
        assert_eq!(response.total_courses, 1);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
