use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use learnhub_core::CourseId;

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/:course_id/rating-stats", get(rating_stats))
}

pub async fn rating_stats(
    Extension(services): Extension<Arc<AppServices>>,
    Path(course_id): Path<String>,
) -> axum::response::Response {
    match services.reviews.course_stats(&CourseId::from(course_id)) {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
