use super::*;
use crate::net::types::Role;

fn user(id: i64, username: &str) -> User {
    User {
        id,
        username: username.to_owned(),
        email: format!("{username}@example.com"),
        first_name: String::new(),
        last_name: String::new(),
        role: Role::Student,
        created_at: String::new(),
    }
}

#[test]
fn total_pages_rounds_up() {
    assert_eq!(total_pages(0), 1);
    assert_eq!(total_pages(1), 1);
    assert_eq!(total_pages(10), 1);
    assert_eq!(total_pages(11), 2);
    assert_eq!(total_pages(95), 10);
}

#[test]
fn total_pages_handles_negative_count() {
    assert_eq!(total_pages(-1), 1);
}

#[test]
fn toggle_selection_adds_new_user() {
    let selected = toggle_selection(vec![], &user(1, "a"));
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].id, 1);
}

#[test]
fn toggle_selection_removes_existing_user() {
    let selected = vec![user(1, "a"), user(2, "b")];
    let selected = toggle_selection(selected, &user(1, "a"));
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].id, 2);
}

#[test]
fn toggle_selection_matches_by_id_not_name() {
    let selected = vec![user(1, "old-name")];
    let selected = toggle_selection(selected, &user(1, "new-name"));
    assert!(selected.is_empty());
}
