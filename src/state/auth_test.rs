use super::*;

fn user_with_role(role: Role) -> User {
    User {
        id: 1,
        username: "sam".to_owned(),
        email: "sam@example.com".to_owned(),
        first_name: String::new(),
        last_name: String::new(),
        role,
        created_at: String::new(),
    }
}

#[test]
fn default_state_is_loading_without_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.loading);
    assert_eq!(state.role(), None);
}

#[test]
fn role_helpers_match_signed_in_role() {
    let admin = AuthState {
        user: Some(user_with_role(Role::Admin)),
        loading: false,
    };
    assert!(admin.is_admin());
    assert!(!admin.is_student());

    let student = AuthState {
        user: Some(user_with_role(Role::Student)),
        loading: false,
    };
    assert!(student.is_student());
    assert!(!student.is_teacher());
}
