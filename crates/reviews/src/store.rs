//! Review storage abstraction.

use std::sync::Arc;

use learnhub_core::{CourseId, DomainResult, ReviewId, UserId};

use crate::Review;

/// Which reviews a listing should return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewFilter {
    All,
    Course(CourseId),
    Author(UserId),
}

impl ReviewFilter {
    pub fn matches(&self, review: &Review) -> bool {
        match self {
            ReviewFilter::All => true,
            ReviewFilter::Course(course_id) => &review.course_id == course_id,
            ReviewFilter::Author(user_id) => &review.user_id == user_id,
        }
    }
}

/// Mutation callback run while the store holds its write lock.
pub type ReviewMutation<'a> = &'a mut dyn FnMut(&mut Review) -> DomainResult<()>;

/// Acceptance check run while the store holds its write lock.
pub type ReviewCheck<'a> = &'a dyn Fn(&Review) -> DomainResult<()>;

/// Review persistence.
///
/// Implementations must make each call atomic with respect to other calls:
/// the uniqueness check in [`insert_unique`](ReviewStore::insert_unique) and
/// the callback in [`modify`](ReviewStore::modify) /
/// [`remove_if`](ReviewStore::remove_if) run in the same critical section as
/// the write they guard. Listings return reviews in insertion order.
pub trait ReviewStore: Send + Sync {
    fn get(&self, review_id: &ReviewId) -> DomainResult<Option<Review>>;

    fn list(&self, filter: &ReviewFilter) -> DomainResult<Vec<Review>>;

    /// Insert `review` unless its author already reviewed the same course
    /// (`Conflict`).
    fn insert_unique(&self, review: Review) -> DomainResult<Review>;

    /// Run `mutate` against the stored review and persist the result only if it
    /// succeeds. Returns the review as stored afterwards.
    fn modify(&self, review_id: &ReviewId, mutate: ReviewMutation<'_>) -> DomainResult<Review>;

    /// Remove the review if `check` accepts it. Returns the removed review.
    fn remove_if(&self, review_id: &ReviewId, check: ReviewCheck<'_>) -> DomainResult<Review>;
}

impl<S> ReviewStore for Arc<S>
where
    S: ReviewStore + ?Sized,
{
    fn get(&self, review_id: &ReviewId) -> DomainResult<Option<Review>> {
        (**self).get(review_id)
    }

    fn list(&self, filter: &ReviewFilter) -> DomainResult<Vec<Review>> {
        (**self).list(filter)
    }

    fn insert_unique(&self, review: Review) -> DomainResult<Review> {
        (**self).insert_unique(review)
    }

    fn modify(&self, review_id: &ReviewId, mutate: ReviewMutation<'_>) -> DomainResult<Review> {
        (**self).modify(review_id, mutate)
    }

    fn remove_if(&self, review_id: &ReviewId, check: ReviewCheck<'_>) -> DomainResult<Review> {
        (**self).remove_if(review_id, check)
    }
}
