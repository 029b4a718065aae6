use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use crate::context::ActorContext;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Course Reviews and Ratings Service",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/reviews/create",
            "/reviews/top-rated",
            "/reviews/course/{course_id}",
            "/reviews/user/{user_id}",
            "/reviews/{review_id}",
            "/courses/{course_id}/rating-stats",
        ],
    }))
}

pub async fn whoami(Extension(ctx): Extension<ActorContext>) -> impl IntoResponse {
    Json(serde_json::json!({
        "user_id": ctx.user_id().to_string(),
        "role": ctx.role().as_str(),
    }))
}
