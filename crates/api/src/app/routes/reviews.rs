use std::sync::Arc;

use axum::{
    extract::{
        Extension, Path, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    middleware::from_fn_with_state,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};

use learnhub_core::{CourseId, DomainError, ReviewId, UserId};
use learnhub_reviews::{HelpfulVote, PageRequest, SortKey};

use crate::app::{dto, errors};
use crate::app::services::AppServices;
use crate::context::ActorContext;
use crate::middleware::{AuthState, auth_middleware};

pub const TOP_RATED_DEFAULT_LIMIT: u32 = 10;
pub const TOP_RATED_MAX_LIMIT: u32 = 50;

pub fn router(auth: AuthState) -> Router {
    let protected = Router::new()
        .route("/create", post(create_review))
        .route("/:review_id", delete(delete_review))
        .route("/:review_id/update", put(update_review))
        .route("/:review_id/helpful", put(mark_helpful))
        .route_layer(from_fn_with_state(auth, auth_middleware));

    Router::new()
        .route("/top-rated", get(top_rated))
        .route("/course/:course_id", get(course_reviews))
        .route("/user/:user_id", get(user_reviews))
        .route("/:review_id", get(get_review))
        .merge(protected)
}

pub async fn create_review(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<ActorContext>,
    body: Result<Json<dto::CreateReviewRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(v) => v,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    let input = match body.into_domain() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.reviews.create(ctx.actor(), input) {
        Ok(review) => (StatusCode::CREATED, Json(review)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_review(
    Extension(services): Extension<Arc<AppServices>>,
    Path(review_id): Path<String>,
) -> axum::response::Response {
    match services.reviews.get(&ReviewId::from(review_id)) {
        Ok(review) => (StatusCode::OK, Json(review)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_review(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<ActorContext>,
    Path(review_id): Path<String>,
    body: Result<Json<dto::UpdateReviewRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(v) => v,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    match services
        .reviews
        .update(ctx.actor(), &ReviewId::from(review_id), body.into())
    {
        Ok(review) => (StatusCode::OK, Json(review)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_review(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<ActorContext>,
    Path(review_id): Path<String>,
) -> axum::response::Response {
    match services.reviews.delete(ctx.actor(), &ReviewId::from(review_id)) {
        Ok(removed) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "message": "review deleted",
                "review_id": removed.review_id,
            })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn mark_helpful(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<ActorContext>,
    Path(review_id): Path<String>,
    body: Result<Json<dto::HelpfulRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(v) => v,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    let review_id = ReviewId::from(review_id);
    let vote = HelpfulVote::from(body.helpful);

    match services.reviews.mark_helpful(ctx.actor(), &review_id, vote) {
        Ok(helpful_count) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "message": if body.helpful { "review marked as helpful" } else { "review marked as not helpful" },
                "review_id": review_id,
                "helpful_count": helpful_count,
            })),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn course_reviews(
    Extension(services): Extension<Arc<AppServices>>,
    Path(course_id): Path<String>,
    query: Result<Query<dto::CourseReviewsQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(v) => v,
        Err(rejection) => return errors::query_rejection_to_response(rejection),
    };
    let request = match PageRequest::new(query.page, query.limit) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let sort = match query.sort_by.as_deref() {
        None => Some(SortKey::default()),
        Some(raw) => match raw.parse::<SortKey>() {
            Ok(key) => Some(key),
            Err(_) => {
                tracing::debug!(sort_by = raw, "unknown sort key; keeping store order");
                None
            }
        },
    };

    match services
        .reviews
        .course_reviews(&CourseId::from(course_id), sort, request)
    {
        Ok(page) => (StatusCode::OK, Json(dto::course_reviews_to_json(page))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn user_reviews(
    Extension(services): Extension<Arc<AppServices>>,
    Path(user_id): Path<String>,
    query: Result<Query<dto::PageQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(v) => v,
        Err(rejection) => return errors::query_rejection_to_response(rejection),
    };
    let request = match PageRequest::new(query.page, query.limit) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.reviews.user_reviews(&UserId::from(user_id), request) {
        Ok(page) => (StatusCode::OK, Json(dto::user_reviews_to_json(page))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn top_rated(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<dto::TopRatedQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(v) => v,
        Err(rejection) => return errors::query_rejection_to_response(rejection),
    };
    let limit = query.limit.unwrap_or(TOP_RATED_DEFAULT_LIMIT);
    if !(1..=TOP_RATED_MAX_LIMIT).contains(&limit) {
        return errors::domain_error_to_response(DomainError::invalid_argument(format!(
            "limit must be between 1 and {TOP_RATED_MAX_LIMIT}"
        )));
    }

    match services.reviews.top_rated(limit as usize) {
        Ok(courses) => (StatusCode::OK, Json(dto::top_rated_to_json(courses))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
