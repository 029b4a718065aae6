use std::sync::Arc;

use serde::{Deserialize, Serialize};

use learnhub_core::{CourseId, DomainResult, UserId};

/// What the reviews service needs to know about a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRef {
    pub course_id: CourseId,
    pub title: String,
    pub instructor_id: UserId,
}

impl CourseRef {
    pub fn new(
        course_id: impl Into<CourseId>,
        title: impl Into<String>,
        instructor_id: impl Into<UserId>,
    ) -> Self {
        Self {
            course_id: course_id.into(),
            title: title.into(),
            instructor_id: instructor_id.into(),
        }
    }
}

/// Course existence and ownership lookups, owned by the course service.
///
/// `Ok(None)` means the course does not exist; `Err` means the catalog could
/// not be read.
pub trait CourseCatalog: Send + Sync {
    fn get(&self, course_id: &CourseId) -> DomainResult<Option<CourseRef>>;

    /// All known courses, in catalog order.
    fn list(&self) -> DomainResult<Vec<CourseRef>>;
}

impl<S> CourseCatalog for Arc<S>
where
    S: CourseCatalog + ?Sized,
{
    fn get(&self, course_id: &CourseId) -> DomainResult<Option<CourseRef>> {
        (**self).get(course_id)
    }

    fn list(&self) -> DomainResult<Vec<CourseRef>> {
        (**self).list()
    }
}
