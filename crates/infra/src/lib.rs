//! Infrastructure layer: storage backends, demo data, and review orchestration.

pub mod catalog;
pub mod review_service;
pub mod review_store;
pub mod seed;

pub use catalog::InMemoryCourseCatalog;
pub use review_service::{CourseRatingSummary, CourseReviewsPage, ReviewService, UserReviewsPage};
pub use review_store::InMemoryReviewStore;
