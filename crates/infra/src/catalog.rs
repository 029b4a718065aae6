//! Course catalog backends.

use std::sync::{RwLock, RwLockReadGuard};

use learnhub_core::{CourseId, DomainError, DomainResult};
use learnhub_reviews::{CourseCatalog, CourseRef};

/// In-memory course catalog for tests/dev. Listing follows insertion order.
#[derive(Debug, Default)]
pub struct InMemoryCourseCatalog {
    inner: RwLock<Vec<CourseRef>>,
}

impl InMemoryCourseCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_courses(courses: impl IntoIterator<Item = CourseRef>) -> Self {
        let mut rows: Vec<CourseRef> = Vec::new();
        for course in courses {
            put(&mut rows, course);
        }
        Self {
            inner: RwLock::new(rows),
        }
    }

    pub fn upsert(&self, course: CourseRef) -> DomainResult<()> {
        let mut rows = self.inner.write().map_err(|_| poisoned())?;
        put(&mut rows, course);
        Ok(())
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, Vec<CourseRef>>> {
        self.inner.read().map_err(|_| poisoned())
    }
}

fn put(rows: &mut Vec<CourseRef>, course: CourseRef) {
    match rows.iter_mut().find(|c| c.course_id == course.course_id) {
        Some(existing) => *existing = course,
        None => rows.push(course),
    }
}

fn poisoned() -> DomainError {
    DomainError::storage("course catalog lock poisoned")
}

impl CourseCatalog for InMemoryCourseCatalog {
    fn get(&self, course_id: &CourseId) -> DomainResult<Option<CourseRef>> {
        let courses = self.read()?;
        Ok(courses.iter().find(|c| &c.course_id == course_id).cloned())
    }

    fn list(&self) -> DomainResult<Vec<CourseRef>> {
        Ok(self.read()?.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn upsert_replaces_in_place() {
        let catalog = InMemoryCourseCatalog::with_courses([
            CourseRef::new("c1", "Old title", "i1"),
            CourseRef::new("c2", "Second", "i2"),
        ]);
        catalog.upsert(CourseRef::new("c1", "New title", "i1")).unwrap();

        let titles: Vec<String> = catalog.list().unwrap().into_iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["New title", "Second"]);
        assert_eq!(
            catalog.get(&CourseId::from("c2")).unwrap().unwrap().instructor_id.as_str(),
            "i2"
        );
        assert!(catalog.get(&CourseId::from("c3")).unwrap().is_none());
    }

    #[test]
    fn poisoned_lock_is_a_storage_error_not_a_miss() {
        let catalog = Arc::new(InMemoryCourseCatalog::with_courses([CourseRef::new("c1", "Web", "i1")]));

        let poisoner = catalog.clone();
        let _ = thread::spawn(move || {
            let _guard = poisoner.inner.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();

        assert!(matches!(catalog.get(&CourseId::from("c1")), Err(DomainError::Storage(_))));
        assert!(matches!(catalog.list(), Err(DomainError::Storage(_))));
        assert!(matches!(
            catalog.upsert(CourseRef::new("c2", "Data", "i2")),
            Err(DomainError::Storage(_))
        ));
    }
}
