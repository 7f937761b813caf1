use super::*;

#[test]
fn count_label_is_singular_for_one() {
    assert_eq!(course_count_label(1), "1 course");
}

#[test]
fn count_label_is_plural_otherwise() {
    assert_eq!(course_count_label(0), "0 courses");
    assert_eq!(course_count_label(12), "12 courses");
}
