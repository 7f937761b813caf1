use super::*;

#[test]
fn role_choices_parse() {
    assert_eq!(parse_role_choice("student"), Some(Role::Student));
    assert_eq!(parse_role_choice("teacher"), Some(Role::Teacher));
    assert_eq!(parse_role_choice("admin"), Some(Role::Admin));
}

#[test]
fn unknown_role_choice_is_rejected() {
    assert_eq!(parse_role_choice(""), None);
    assert_eq!(parse_role_choice("superuser"), None);
}

#[test]
fn role_labels_round_trip() {
    for role in [Role::Student, Role::Teacher, Role::Admin] {
        let label = role_choice_label(role);
        assert_eq!(parse_role_choice(&label.to_lowercase()), Some(role));
    }
}

#[test]
fn delete_user_message_counts() {
    assert!(delete_users_message(1).starts_with("Delete 1 user?"));
    assert!(delete_users_message(3).starts_with("Delete 3 users?"));
}

#[test]
fn delete_course_message_names_the_course() {
    assert_eq!(
        delete_course_message("Rust 101"),
        "Delete \"Rust 101\"? All enrollments in it are removed."
    );
}
