//! Course catalog and enrollment state.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashSet;

use crate::net::types::{Course, Enrollment};

/// Shared course/enrollment state for the catalog and dashboard.
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    pub courses: Vec<Course>,
    pub enrollments: Vec<Enrollment>,
    pub loading: bool,
    /// Courses with an enroll request in flight, to disable their buttons.
    pub enroll_pending: HashSet<i64>,
    pub error: Option<String>,
}

impl CatalogState {
    /// Whether the current user has an enrollment for `course_id`.
    pub fn is_enrolled(&self, course_id: i64) -> bool {
        self.enrollments.iter().any(|e| e.course.id == course_id)
    }

    /// Case-insensitive title/description filter for the catalog search box.
    pub fn filtered_courses(&self, query: &str) -> Vec<Course> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.courses.clone();
        }
        self.courses
            .iter()
            .filter(|c| c.title.to_lowercase().contains(&needle) || c.description.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}
