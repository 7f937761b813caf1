use super::*;

#[test]
fn parse_id_accepts_integers() {
    assert_eq!(parse_id(Some("42".to_owned())), Some(42));
}

#[test]
fn parse_id_rejects_garbage_and_absence() {
    assert_eq!(parse_id(Some("abc".to_owned())), None);
    assert_eq!(parse_id(Some(String::new())), None);
    assert_eq!(parse_id(None), None);
}

#[test]
fn in_my_courses_matches_route_family() {
    assert!(in_my_courses("/app/my-courses/42"));
    assert!(in_my_courses("/app/my-courses/42/modules/7"));
    assert!(!in_my_courses("/app/courses/42"));
    assert!(!in_my_courses("/app/my-courses"));
}
