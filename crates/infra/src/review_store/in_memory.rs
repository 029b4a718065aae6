use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use learnhub_core::{DomainError, DomainResult, Entity, ReviewId};
use learnhub_reviews::{Review, ReviewCheck, ReviewFilter, ReviewMutation, ReviewStore};

/// In-memory review store for tests/dev.
///
/// One `RwLock` guards the whole review set, so every check-then-write runs
/// inside a single critical section. Rows are kept in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryReviewStore {
    rows: RwLock<Vec<Review>>,
}

impl InMemoryReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Build a store pre-populated with `reviews`, bypassing uniqueness checks.
    pub fn with_reviews(reviews: impl IntoIterator<Item = Review>) -> Self {
        Self {
            rows: RwLock::new(reviews.into_iter().collect()),
        }
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, Vec<Review>>> {
        self.rows
            .read()
            .map_err(|_| DomainError::storage("review store lock poisoned"))
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, Vec<Review>>> {
        self.rows
            .write()
            .map_err(|_| DomainError::storage("review store lock poisoned"))
    }
}

fn position(rows: &[Review], review_id: &ReviewId) -> DomainResult<usize> {
    rows.iter()
        .position(|r| r.has_id(review_id))
        .ok_or_else(|| DomainError::not_found("review"))
}

impl ReviewStore for InMemoryReviewStore {
    fn get(&self, review_id: &ReviewId) -> DomainResult<Option<Review>> {
        let rows = self.read()?;
        Ok(rows.iter().find(|r| r.has_id(review_id)).cloned())
    }

    fn list(&self, filter: &ReviewFilter) -> DomainResult<Vec<Review>> {
        let rows = self.read()?;
        Ok(rows.iter().filter(|r| filter.matches(r)).cloned().collect())
    }

    fn insert_unique(&self, review: Review) -> DomainResult<Review> {
        let mut rows = self.write()?;
        if rows
            .iter()
            .any(|r| r.course_id == review.course_id && r.user_id == review.user_id)
        {
            return Err(DomainError::conflict(
                "you have already reviewed this course; update the existing review instead",
            ));
        }
        if rows.iter().any(|r| r.has_id(review.id())) {
            return Err(DomainError::conflict(format!(
                "review id {} already exists",
                review.review_id
            )));
        }
        rows.push(review.clone());
        Ok(review)
    }

    fn modify(&self, review_id: &ReviewId, mutate: ReviewMutation<'_>) -> DomainResult<Review> {
        let mut rows = self.write()?;
        let idx = position(&rows, review_id)?;

        // Mutate a copy so a failing callback leaves the stored row untouched.
        let mut draft = rows[idx].clone();
        mutate(&mut draft)?;
        rows[idx] = draft.clone();
        Ok(draft)
    }

    fn remove_if(&self, review_id: &ReviewId, check: ReviewCheck<'_>) -> DomainResult<Review> {
        let mut rows = self.write()?;
        let idx = position(&rows, review_id)?;
        check(&rows[idx])?;
        Ok(rows.remove(idx))
    }
}
