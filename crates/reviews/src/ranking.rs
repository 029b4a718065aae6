//! Top-rated course ranking.

use std::collections::HashMap;

use serde::Serialize;

use learnhub_core::CourseId;

use crate::{CourseRef, RatingStats, Review};

/// Courses with fewer reviews than this are left out of the ranking.
pub const MIN_REVIEWS_FOR_RANKING: u32 = 2;

/// Review count at which the volume weight stops growing.
const FULL_WEIGHT_REVIEWS: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopRatedCourse {
    pub course_id: CourseId,
    pub course_title: String,
    pub average_rating: f64,
    pub total_reviews: u32,
    pub rating_score: f64,
}

/// Average rating scaled by `min(total / 10, 1)`.
pub fn rating_score(stats: &RatingStats) -> f64 {
    let weight = (f64::from(stats.total_reviews) / FULL_WEIGHT_REVIEWS).min(1.0);
    stats.average_rating * weight
}

/// Rank `courses` by [`rating_score`] over their reviews, best first, keeping
/// at most `limit` entries. Courses under [`MIN_REVIEWS_FOR_RANKING`] reviews
/// are excluded. Equal scores keep catalog order.
pub fn top_rated(courses: &[CourseRef], reviews: &[Review], limit: usize) -> Vec<TopRatedCourse> {
    let mut by_course: HashMap<&CourseId, Vec<&Review>> = HashMap::new();
    for review in reviews {
        by_course.entry(&review.course_id).or_default().push(review);
    }

    let mut ranked: Vec<TopRatedCourse> = courses
        .iter()
        .filter_map(|course| {
            let course_reviews = by_course.get(&course.course_id)?;
            let stats = RatingStats::from_reviews(course_reviews.iter().copied());
            if stats.total_reviews < MIN_REVIEWS_FOR_RANKING {
                return None;
            }
            Some(TopRatedCourse {
                course_id: course.course_id.clone(),
                course_title: course.title.clone(),
                average_rating: stats.average_rating,
                total_reviews: stats.total_reviews,
                rating_score: rating_score(&stats),
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.rating_score.total_cmp(&a.rating_score));
    ranked.truncate(limit);
    ranked
}
