//! Records with a stable identity.

use core::fmt::Debug;
use core::hash::Hash;

/// A record whose identity survives edits to its other fields.
///
/// Stores locate rows through [`Entity::has_id`] rather than comparing id
/// fields by hand.
pub trait Entity {
    type Id: Clone + Eq + Hash + Debug;

    fn id(&self) -> &Self::Id;

    fn has_id(&self, id: &Self::Id) -> bool {
        self.id() == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CourseId;

    struct Course {
        id: CourseId,
        title: &'static str,
    }

    impl Entity for Course {
        type Id = CourseId;

        fn id(&self) -> &CourseId {
            &self.id
        }
    }

    #[test]
    fn identity_ignores_other_fields() {
        let mut course = Course {
            id: CourseId::from("course_001"),
            title: "Draft",
        };
        course.title = "Complete Web Development Bootcamp";
        assert_eq!(course.title, "Complete Web Development Bootcamp");
        assert!(course.has_id(&CourseId::from("course_001")));
        assert!(!course.has_id(&CourseId::from("course_002")));
    }
}
