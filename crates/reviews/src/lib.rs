//! Reviews domain module.
//!
//! Business rules for course reviews: the review lifecycle, rating statistics,
//! ordering, and top-rated ranking. Implemented purely as deterministic domain
//! logic (no IO, no HTTP). Storage and course lookups are reached through the
//! [`ReviewStore`] and [`CourseCatalog`] traits.

pub mod catalog;
pub mod ordering;
pub mod page;
pub mod ranking;
pub mod review;
pub mod stats;
pub mod store;

pub use catalog::{CourseCatalog, CourseRef};
pub use ordering::{SortKey, order_reviews, sort_reviews};
pub use page::{Page, PageRequest};
pub use ranking::{MIN_REVIEWS_FOR_RANKING, TopRatedCourse, top_rated};
pub use review::{HelpfulVote, NewReview, Rating, Review, ReviewUpdate};
pub use stats::{RatingDistribution, RatingStats};
pub use store::{ReviewCheck, ReviewFilter, ReviewMutation, ReviewStore};
