//! Route templates for course navigation.
//!
//! Two parallel path families exist for the same course content: the public
//! catalog and the enrolled "my courses" view. Both nest the same way:
//! `/{root}/{course}[/modules/{module}[/content/{content}]]`.

#[cfg(test)]
#[path = "paths_test.rs"]
mod paths_test;

use super::CourseId;

const CATALOG_ROOT: &str = "/app/courses";
const MY_COURSES_ROOT: &str = "/app/my-courses";

/// Path into the public catalog view of a course.
pub fn catalog_path(course_id: CourseId, module_id: Option<i64>, content_id: Option<i64>) -> String {
    course_path(CATALOG_ROOT, course_id, module_id, content_id)
}

/// Path into the enrolled "my courses" view of a course.
pub fn my_courses_path(course_id: CourseId, module_id: Option<i64>, content_id: Option<i64>) -> String {
    course_path(MY_COURSES_ROOT, course_id, module_id, content_id)
}

/// A content id without a module id has no addressable route; it is ignored.
fn course_path(root: &str, course_id: CourseId, module_id: Option<i64>, content_id: Option<i64>) -> String {
    let mut path = format!("{root}/{course_id}");
    if let Some(module_id) = module_id {
        path.push_str(&format!("/modules/{module_id}"));
        if let Some(content_id) = content_id {
            path.push_str(&format!("/content/{content_id}"));
        }
    }
    path
}
