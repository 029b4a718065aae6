use std::sync::Arc;

use learnhub_auth::{InMemoryUserDirectory, MockTokenResolver, TokenResolver};
use learnhub_infra::{InMemoryCourseCatalog, InMemoryReviewStore, ReviewService, seed};

use crate::config::ApiConfig;

/// Everything the handlers need, shared behind an `Arc`.
#[derive(Clone)]
pub struct AppServices {
    pub reviews: ReviewService,
    pub resolver: Arc<dyn TokenResolver>,
}

pub fn build_services(config: &ApiConfig) -> AppServices {
    let (users, courses, reviews) = if config.seed_demo_data {
        (
            InMemoryUserDirectory::with_users(seed::demo_users()),
            InMemoryCourseCatalog::with_courses(seed::demo_courses()),
            InMemoryReviewStore::with_reviews(seed::demo_reviews()),
        )
    } else {
        (
            InMemoryUserDirectory::new(),
            InMemoryCourseCatalog::new(),
            InMemoryReviewStore::new(),
        )
    };

    let users = Arc::new(users);
    let resolver: Arc<dyn TokenResolver> = Arc::new(MockTokenResolver::new(users.clone()));

    AppServices {
        reviews: ReviewService::new(Arc::new(reviews), Arc::new(courses), users),
        resolver,
    }
}
