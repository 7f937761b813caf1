//! Maps course locations to catalog or "my courses" routes.

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

use std::rc::Rc;

use super::enrollment::EnrollmentCache;
use super::{CourseId, paths};

/// Chooses between the catalog and enrolled route for a course location.
///
/// Cloneable handle over the shared [`EnrollmentCache`]; the application
/// holds one instance and every component navigates through it.
#[derive(Clone)]
pub struct NavigationPathResolver {
    cache: Rc<EnrollmentCache>,
}

impl NavigationPathResolver {
    pub fn new(cache: Rc<EnrollmentCache>) -> Self {
        Self { cache }
    }

    /// The underlying cache, for enrollment-change writes and logout
    /// invalidation.
    pub fn cache(&self) -> &Rc<EnrollmentCache> {
        &self.cache
    }

    /// Resolve a `(course, module?, content?)` location to a path. Always
    /// yields a valid path: unknown or undeterminable enrollment falls back
    /// to the catalog template.
    pub async fn resolve(&self, course_id: CourseId, module_id: Option<i64>, content_id: Option<i64>) -> String {
        if self.cache.is_enrolled(course_id).await {
            paths::my_courses_path(course_id, module_id, content_id)
        } else {
            paths::catalog_path(course_id, module_id, content_id)
        }
    }

    /// Resolve a bare course path.
    pub async fn resolve_course(&self, course_id: CourseId) -> String {
        self.resolve(course_id, None, None).await
    }
}
