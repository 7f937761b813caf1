use super::*;

#[test]
fn catalog_path_course_only() {
    assert_eq!(catalog_path(42, None, None), "/app/courses/42");
}

#[test]
fn my_courses_path_course_only() {
    assert_eq!(my_courses_path(42, None, None), "/app/my-courses/42");
}

#[test]
fn catalog_path_with_module() {
    assert_eq!(catalog_path(42, Some(7), None), "/app/courses/42/modules/7");
}

#[test]
fn my_courses_path_with_module_and_content() {
    assert_eq!(
        my_courses_path(42, Some(7), Some(3)),
        "/app/my-courses/42/modules/7/content/3"
    );
}

#[test]
fn content_without_module_is_ignored() {
    assert_eq!(catalog_path(42, None, Some(3)), "/app/courses/42");
}
