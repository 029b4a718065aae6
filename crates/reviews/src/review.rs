use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use learnhub_auth::{Actor, UserProfile, forbid_author, require_author, require_author_or_admin};
use learnhub_core::{CourseId, DomainError, DomainResult, Entity, ReviewId, UserId};

use crate::CourseRef;

/// Star rating, always within `1..=5`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> DomainResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Self::out_of_range())
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    fn out_of_range() -> DomainError {
        DomainError::invalid_argument("rating must be between 1 and 5")
    }
}

impl TryFrom<i64> for Rating {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| Self::out_of_range())
            .and_then(Self::new)
    }
}

impl From<Rating> for u8 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

/// A rating plus optional comment left by one user on one course.
///
/// `user_name` and `user_avatar` are a snapshot of the author's profile taken
/// when the review was created; later profile edits do not reach them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub review_id: ReviewId,
    pub course_id: CourseId,
    pub user_id: UserId,
    pub user_name: String,
    pub user_avatar: Option<String>,
    pub rating: Rating,
    pub comment: Option<String>,
    pub helpful_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a review. The rating is unvalidated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub course_id: CourseId,
    pub rating: i64,
    pub comment: Option<String>,
}

/// Partial update of a review. `None` leaves the field untouched.
///
/// `comment` is doubly optional: `Some(None)` removes the comment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewUpdate {
    pub rating: Option<i64>,
    pub comment: Option<Option<String>>,
}

/// Direction of a helpful-count change.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HelpfulVote {
    Helpful,
    NotHelpful,
}

impl From<bool> for HelpfulVote {
    fn from(helpful: bool) -> Self {
        if helpful {
            HelpfulVote::Helpful
        } else {
            HelpfulVote::NotHelpful
        }
    }
}

impl Review {
    /// Build a fresh review for `course` written by `author`.
    ///
    /// Uniqueness per (author, course) is not checked here: that needs the
    /// whole review set and is enforced by the store at insert time.
    pub fn open(
        review_id: ReviewId,
        course: &CourseRef,
        author: &UserProfile,
        input: NewReview,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if input.course_id != course.course_id {
            return Err(DomainError::invalid_argument("course reference does not match review input"));
        }
        let rating = Rating::try_from(input.rating)?;
        if course.instructor_id == author.user_id {
            return Err(DomainError::forbidden("instructors cannot review their own courses"));
        }

        Ok(Self {
            review_id,
            course_id: course.course_id.clone(),
            user_id: author.user_id.clone(),
            user_name: author.name.clone(),
            user_avatar: author.avatar.clone(),
            rating,
            comment: input.comment,
            helpful_count: 0,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply an author's edit. Nothing changes if any supplied field is invalid.
    pub fn apply_update(&mut self, actor: &Actor, update: ReviewUpdate, now: DateTime<Utc>) -> DomainResult<()> {
        require_author(actor, &self.user_id, "update this review")?;

        let rating = update.rating.map(Rating::try_from).transpose()?;
        if let Some(rating) = rating {
            self.rating = rating;
        }
        if let Some(comment) = update.comment {
            self.comment = comment;
        }
        self.updated_at = now;
        Ok(())
    }

    /// Move the helpful counter by one, never below zero. Returns the new count.
    ///
    /// This is a plain counter: the same actor may vote repeatedly.
    pub fn mark_helpful(&mut self, actor: &Actor, vote: HelpfulVote) -> DomainResult<u32> {
        forbid_author(actor, &self.user_id, "vote on")?;

        self.helpful_count = match vote {
            HelpfulVote::Helpful => self.helpful_count.saturating_add(1),
            HelpfulVote::NotHelpful => self.helpful_count.saturating_sub(1),
        };
        Ok(self.helpful_count)
    }

    pub fn ensure_deletable_by(&self, actor: &Actor) -> DomainResult<()> {
        require_author_or_admin(actor, &self.user_id, "delete this review")?;
        Ok(())
    }
}

impl Entity for Review {
    type Id = ReviewId;

    fn id(&self) -> &Self::Id {
        &self.review_id
    }
}
