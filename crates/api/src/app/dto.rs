use serde::{Deserialize, Deserializer};
use serde_json::{Value, json};

use learnhub_core::{CourseId, DomainResult};
use learnhub_infra::{CourseReviewsPage, UserReviewsPage};
use learnhub_reviews::{NewReview, ReviewUpdate, TopRatedCourse};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub course_id: String,
    pub rating: i64,
    pub comment: Option<String>,
}

impl CreateReviewRequest {
    pub fn into_domain(self) -> DomainResult<NewReview> {
        Ok(NewReview {
            course_id: self.course_id.parse::<CourseId>()?,
            rating: self.rating,
            comment: self.comment,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateReviewRequest {
    pub rating: Option<i64>,
    /// Absent: keep the comment. `null`: remove it.
    #[serde(default, deserialize_with = "present")]
    pub comment: Option<Option<String>>,
}

/// Marks a field as present even when its value is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl From<UpdateReviewRequest> for ReviewUpdate {
    fn from(value: UpdateReviewRequest) -> Self {
        ReviewUpdate {
            rating: value.rating,
            comment: value.comment,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct HelpfulRequest {
    pub helpful: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct CourseReviewsQuery {
    pub sort_by: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TopRatedQuery {
    pub limit: Option<u32>,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn course_reviews_to_json(page: CourseReviewsPage) -> Value {
    json!({
        "total": page.page.total,
        "reviews": page.page.items,
        "page": page.page.page,
        "limit": page.page.limit,
        "average_rating": page.stats.average_rating,
        "rating_distribution": page.stats.rating_distribution,
    })
}

pub fn user_reviews_to_json(page: UserReviewsPage) -> Value {
    json!({
        "total": page.page.total,
        "reviews": page.page.items,
        "page": page.page.page,
        "limit": page.page.limit,
        "user_name": page.user_name,
    })
}

pub fn top_rated_to_json(courses: Vec<TopRatedCourse>) -> Value {
    json!({ "top_rated_courses": courses })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(body: &str) -> ReviewUpdate {
        serde_json::from_str::<UpdateReviewRequest>(body).unwrap().into()
    }

    #[test]
    fn update_comment_distinguishes_null_from_absent() {
        assert_eq!(update(r#"{"rating": 3}"#).comment, None);
        assert_eq!(update(r#"{"comment": null}"#).comment, Some(None));
        assert_eq!(update(r#"{"comment": "ok"}"#).comment, Some(Some("ok".to_string())));
        assert_eq!(update("{}"), ReviewUpdate::default());
    }
}
