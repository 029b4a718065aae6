//! Review operations (application-level orchestration).
//!
//! `ReviewService` composes the review store, course catalog and user directory
//! and runs every review operation against them:
//!
//! ```text
//! request (actor + input)
//!   ↓
//! 1. Resolve references (course, author profile)        → NotFound
//!   ↓
//! 2. Domain decision (rating range, ownership rules)    → InvalidArgument / Forbidden
//!   ↓
//! 3. Store write under its lock (uniqueness, counters)  → Conflict / NotFound
//! ```
//!
//! Reads recompute statistics from the current review set on every call.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use learnhub_auth::{Actor, UserDirectory, UserProfile};
use learnhub_core::{CourseId, DomainError, DomainResult, ReviewId, UserId};
use learnhub_reviews::{
    CourseCatalog, CourseRef, HelpfulVote, NewReview, Page, PageRequest, RatingStats, Review,
    ReviewFilter, ReviewStore, ReviewUpdate, SortKey, TopRatedCourse, sort_reviews, top_rated,
};

/// How many reviews the stats view shows as "recent".
pub const RECENT_REVIEWS: usize = 5;

/// A page of one course's reviews plus that course's statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseReviewsPage {
    #[serde(flatten)]
    pub stats: RatingStats,
    pub page: Page<Review>,
}

/// A page of one author's reviews.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserReviewsPage {
    pub user_name: String,
    pub page: Page<Review>,
}

/// Statistics for one course plus its newest reviews.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseRatingSummary {
    pub course_id: CourseId,
    #[serde(flatten)]
    pub stats: RatingStats,
    pub recent_reviews: Vec<Review>,
}

#[derive(Clone)]
pub struct ReviewService {
    reviews: Arc<dyn ReviewStore>,
    courses: Arc<dyn CourseCatalog>,
    users: Arc<dyn UserDirectory>,
}

impl ReviewService {
    pub fn new(
        reviews: Arc<dyn ReviewStore>,
        courses: Arc<dyn CourseCatalog>,
        users: Arc<dyn UserDirectory>,
    ) -> Self {
        Self {
            reviews,
            courses,
            users,
        }
    }

    fn course(&self, course_id: &CourseId) -> DomainResult<CourseRef> {
        self.courses
            .get(course_id)?
            .ok_or_else(|| DomainError::not_found("course"))
    }

    fn user(&self, user_id: &UserId) -> DomainResult<UserProfile> {
        self.users
            .get(user_id)?
            .ok_or_else(|| DomainError::not_found("user"))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────

    pub fn create(&self, actor: &Actor, input: NewReview) -> DomainResult<Review> {
        let course = self.course(&input.course_id)?;
        let author = self.user(&actor.user_id)?;

        let review = Review::open(ReviewId::generate(), &course, &author, input, Utc::now())?;
        let review = self.reviews.insert_unique(review)?;

        tracing::info!(
            review_id = %review.review_id,
            course_id = %review.course_id,
            user_id = %review.user_id,
            rating = review.rating.get(),
            "review created"
        );
        Ok(review)
    }

    pub fn update(&self, actor: &Actor, review_id: &ReviewId, update: ReviewUpdate) -> DomainResult<Review> {
        let mut update = Some(update);
        let review = self.reviews.modify(review_id, &mut |review| {
            let update = update.take().unwrap_or_default();
            review.apply_update(actor, update, Utc::now())
        })?;

        tracing::info!(review_id = %review.review_id, user_id = %actor.user_id, "review updated");
        Ok(review)
    }

    pub fn delete(&self, actor: &Actor, review_id: &ReviewId) -> DomainResult<Review> {
        let removed = self
            .reviews
            .remove_if(review_id, &|review| review.ensure_deletable_by(actor))?;

        tracing::info!(
            review_id = %removed.review_id,
            deleted_by = %actor.user_id,
            admin = actor.is_admin(),
            "review deleted"
        );
        Ok(removed)
    }

    /// Returns the review's helpful-count after the vote.
    pub fn mark_helpful(&self, actor: &Actor, review_id: &ReviewId, vote: HelpfulVote) -> DomainResult<u32> {
        let review = self.reviews.modify(review_id, &mut |review| {
            review.mark_helpful(actor, vote).map(|_| ())
        })?;

        tracing::debug!(
            review_id = %review.review_id,
            voter = %actor.user_id,
            helpful_count = review.helpful_count,
            "helpful vote recorded"
        );
        Ok(review.helpful_count)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────

    pub fn get(&self, review_id: &ReviewId) -> DomainResult<Review> {
        self.reviews
            .get(review_id)?
            .ok_or_else(|| DomainError::not_found("review"))
    }

    /// `sort` of `None` means the caller's key was unrecognized and the store
    /// order is kept.
    pub fn course_reviews(
        &self,
        course_id: &CourseId,
        sort: Option<SortKey>,
        request: PageRequest,
    ) -> DomainResult<CourseReviewsPage> {
        self.course(course_id)?;
        let reviews = self.reviews.list(&ReviewFilter::Course(course_id.clone()))?;

        let stats = RatingStats::from_reviews(&reviews);
        let ordered = match sort {
            Some(key) => sort_reviews(&reviews, key),
            None => reviews,
        };

        Ok(CourseReviewsPage {
            stats,
            page: Page::slice(ordered, request),
        })
    }

    pub fn user_reviews(&self, user_id: &UserId, request: PageRequest) -> DomainResult<UserReviewsPage> {
        let user = self.user(user_id)?;
        let reviews = self.reviews.list(&ReviewFilter::Author(user_id.clone()))?;
        let ordered = sort_reviews(&reviews, SortKey::DateNew);

        Ok(UserReviewsPage {
            user_name: user.name,
            page: Page::slice(ordered, request),
        })
    }

    pub fn course_stats(&self, course_id: &CourseId) -> DomainResult<CourseRatingSummary> {
        self.course(course_id)?;
        let reviews = self.reviews.list(&ReviewFilter::Course(course_id.clone()))?;

        let stats = RatingStats::from_reviews(&reviews);
        let mut recent_reviews = sort_reviews(&reviews, SortKey::DateNew);
        recent_reviews.truncate(RECENT_REVIEWS);

        Ok(CourseRatingSummary {
            course_id: course_id.clone(),
            stats,
            recent_reviews,
        })
    }

    pub fn top_rated(&self, limit: usize) -> DomainResult<Vec<TopRatedCourse>> {
        let reviews = self.reviews.list(&ReviewFilter::All)?;
        Ok(top_rated(&self.courses.list()?, &reviews, limit))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use learnhub_auth::{InMemoryUserDirectory, Role};

    use super::*;
    use crate::catalog::InMemoryCourseCatalog;
    use crate::review_store::InMemoryReviewStore;
    use crate::seed;

    fn service() -> ReviewService {
        ReviewService::new(
            Arc::new(InMemoryReviewStore::with_reviews(seed::demo_reviews())),
            Arc::new(InMemoryCourseCatalog::with_courses(seed::demo_courses())),
            Arc::new(InMemoryUserDirectory::with_users(seed::demo_users())),
        )
    }

    fn actor(id: &str) -> Actor {
        let role = match id {
            "user_001" | "user_004" => Role::INSTRUCTOR,
            "user_003" => Role::ADMIN,
            _ => Role::STUDENT,
        };
        Actor::new(id, role)
    }

    fn new_review(course: &str, rating: i64) -> NewReview {
        NewReview {
            course_id: CourseId::from(course),
            rating,
            comment: Some("Great advanced React course!".into()),
        }
    }

    #[test]
    fn create_then_get_round_trips() {
        let svc = service();
        let created = svc.create(&actor("user_002"), new_review("course_004", 4)).unwrap();
        let fetched = svc.get(&created.review_id).unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.rating.get(), 4);
        assert_eq!(fetched.comment.as_deref(), Some("Great advanced React course!"));
        assert_eq!(fetched.course_id.as_str(), "course_004");
        assert_eq!(fetched.user_id.as_str(), "user_002");
        assert_eq!(fetched.user_name, "Bob Smith");
        assert_eq!(fetched.helpful_count, 0);
    }

    #[test]
    fn create_failures() {
        let svc = service();

        let err = svc.create(&actor("user_002"), new_review("course_001", 3)).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        let err = svc.create(&actor("user_001"), new_review("course_001", 5)).unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));

        let err = svc.create(&actor("user_005"), new_review("course_999", 5)).unwrap_err();
        assert_eq!(err, DomainError::not_found("course"));

        let err = svc.create(&actor("user_005"), new_review("course_004", 0)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    struct BrokenCatalog;

    impl CourseCatalog for BrokenCatalog {
        fn get(&self, _: &CourseId) -> DomainResult<Option<CourseRef>> {
            Err(DomainError::storage("catalog offline"))
        }

        fn list(&self) -> DomainResult<Vec<CourseRef>> {
            Err(DomainError::storage("catalog offline"))
        }
    }

    #[test]
    fn catalog_failure_is_a_storage_error_not_a_missing_course() {
        let svc = ReviewService::new(
            Arc::new(InMemoryReviewStore::with_reviews(seed::demo_reviews())),
            Arc::new(BrokenCatalog),
            Arc::new(InMemoryUserDirectory::with_users(seed::demo_users())),
        );

        let err = svc.create(&actor("user_005"), new_review("course_004", 4)).unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));
        assert!(matches!(svc.course_stats(&CourseId::from("course_001")), Err(DomainError::Storage(_))));
        assert!(matches!(svc.top_rated(10), Err(DomainError::Storage(_))));
    }

    #[test]
    fn author_snapshot_is_not_refreshed() {
        let users = Arc::new(InMemoryUserDirectory::with_users(seed::demo_users()));
        let svc = ReviewService::new(
            InMemoryReviewStore::arc(),
            Arc::new(InMemoryCourseCatalog::with_courses(seed::demo_courses())),
            users.clone(),
        );
        let created = svc.create(&actor("user_005"), new_review("course_003", 5)).unwrap();

        users
            .upsert(UserProfile::new("user_005", "Emma B. Renamed", Role::STUDENT))
            .unwrap();
        assert_eq!(svc.get(&created.review_id).unwrap().user_name, "Emma Brown");
    }

    #[test]
    fn update_rules() {
        let svc = service();
        let id = ReviewId::from("review_001");

        let err = svc
            .update(&actor("user_005"), &id, ReviewUpdate { rating: Some(1), comment: None })
            .unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));

        let err = svc
            .update(&actor("user_002"), &id, ReviewUpdate { rating: Some(7), comment: None })
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));

        let before = svc.get(&id).unwrap();
        let updated = svc
            .update(
                &actor("user_002"),
                &id,
                ReviewUpdate { rating: Some(3), comment: Some(Some("Updated review".into())) },
            )
            .unwrap();
        assert_eq!(updated.rating.get(), 3);
        assert_eq!(updated.comment.as_deref(), Some("Updated review"));
        assert_eq!(updated.helpful_count, before.helpful_count);
        assert_eq!(updated.created_at, before.created_at);
        assert!(updated.updated_at > before.updated_at);

        let err = svc
            .update(&actor("user_002"), &ReviewId::from("review_404"), ReviewUpdate::default())
            .unwrap_err();
        assert_eq!(err, DomainError::not_found("review"));
    }

    #[test]
    fn delete_rules() {
        let svc = service();

        let err = svc.delete(&actor("user_005"), &ReviewId::from("review_001")).unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));

        svc.delete(&actor("user_002"), &ReviewId::from("review_001")).unwrap();
        svc.delete(&actor("user_003"), &ReviewId::from("review_002")).unwrap();
        assert!(matches!(
            svc.get(&ReviewId::from("review_001")),
            Err(DomainError::NotFound(_))
        ));

        let stats = svc.course_stats(&CourseId::from("course_001")).unwrap();
        assert_eq!(stats.stats.total_reviews, 1);

        // Once deleted, the author may review again.
        svc.create(&actor("user_002"), new_review("course_001", 2)).unwrap();
    }

    #[test]
    fn helpful_votes() {
        let svc = service();
        let id = ReviewId::from("review_004");

        assert_eq!(svc.mark_helpful(&actor("user_002"), &id, HelpfulVote::Helpful).unwrap(), 7);
        assert_eq!(svc.mark_helpful(&actor("user_002"), &id, HelpfulVote::Helpful).unwrap(), 8);

        let err = svc.mark_helpful(&actor("user_007"), &id, HelpfulVote::Helpful).unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));

        for _ in 0..20 {
            svc.mark_helpful(&actor("user_005"), &id, HelpfulVote::NotHelpful).unwrap();
        }
        assert_eq!(svc.get(&id).unwrap().helpful_count, 0);
    }

    #[test]
    fn concurrent_helpful_votes_are_all_counted() {
        let svc = Arc::new(service());
        let id = ReviewId::from("review_006");
        let handles: Vec<_> = ["user_005", "user_006", "user_007", "user_008"]
            .into_iter()
            .map(|voter| {
                let svc = Arc::clone(&svc);
                let id = id.clone();
                thread::spawn(move || {
                    for _ in 0..25 {
                        svc.mark_helpful(&actor(voter), &id, HelpfulVote::Helpful).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(svc.get(&id).unwrap().helpful_count, 7 + 100);
    }

    #[test]
    fn course_reviews_page_sorted_with_stats() {
        let svc = service();
        let course = CourseId::from("course_001");

        let page = svc
            .course_reviews(&course, Some(SortKey::Helpful), PageRequest::new(Some(1), Some(2)).unwrap())
            .unwrap();
        assert_eq!(page.page.total, 3);
        let ids: Vec<&str> = page.page.items.iter().map(|r| r.review_id.as_str()).collect();
        assert_eq!(ids, vec!["review_003", "review_001"]);
        assert_eq!(page.stats.average_rating, 4.7);
        assert_eq!(page.stats.rating_distribution.count(5), 2);

        let unsorted = svc.course_reviews(&course, None, PageRequest::default()).unwrap();
        let ids: Vec<&str> = unsorted.page.items.iter().map(|r| r.review_id.as_str()).collect();
        assert_eq!(ids, vec!["review_001", "review_002", "review_003"]);

        assert!(matches!(
            svc.course_reviews(&CourseId::from("nope"), None, PageRequest::default()),
            Err(DomainError::NotFound(_))
        ));
    }

    #[test]
    fn empty_course_has_zero_stats() {
        let stats = service().course_stats(&CourseId::from("course_004")).unwrap();
        assert_eq!(stats.stats, RatingStats::empty());
        assert!(stats.recent_reviews.is_empty());
    }

    #[test]
    fn course_stats_lists_newest_first() {
        let stats = service().course_stats(&CourseId::from("course_001")).unwrap();
        let ids: Vec<&str> = stats.recent_reviews.iter().map(|r| r.review_id.as_str()).collect();
        assert_eq!(ids, vec!["review_003", "review_001", "review_002"]);
    }

    #[test]
    fn user_reviews_newest_first() {
        let svc = service();
        let page = svc.user_reviews(&UserId::from("user_002"), PageRequest::default()).unwrap();
        assert_eq!(page.user_name, "Bob Smith");
        let ids: Vec<&str> = page.page.items.iter().map(|r| r.review_id.as_str()).collect();
        assert_eq!(ids, vec!["review_001", "review_006"]);

        assert_eq!(
            svc.user_reviews(&UserId::from("user_404"), PageRequest::default()).unwrap_err(),
            DomainError::not_found("user")
        );
    }

    #[test]
    fn top_rated_over_seed_data() {
        let ranked = service().top_rated(10).unwrap();
        // course_003 has one review and course_004 none.
        let ids: Vec<&str> = ranked.iter().map(|c| c.course_id.as_str()).collect();
        assert_eq!(ids, vec!["course_001", "course_002"]);
        assert_eq!(ranked[0].average_rating, 4.7);
        assert!((ranked[0].rating_score - 4.7 * 0.3).abs() < 1e-9);
        assert_eq!(ranked[1].average_rating, 4.5);
        assert!((ranked[1].rating_score - 0.9).abs() < 1e-9);
    }
}
