use super::*;
use crate::net::types::{EnrollmentStatus, Role, User};

fn course(id: i64, title: &str, description: &str) -> Course {
    Course {
        id,
        title: title.to_owned(),
        description: description.to_owned(),
        price: "0.00".to_owned(),
        teacher: User {
            id: 9,
            username: "teach".to_owned(),
            email: "teach@example.com".to_owned(),
            first_name: String::new(),
            last_name: String::new(),
            role: Role::Teacher,
            created_at: String::new(),
        },
        created_at: String::new(),
    }
}

fn enrollment(id: i64, course_id: i64) -> Enrollment {
    Enrollment {
        id,
        course: course(course_id, "c", "d"),
        status: EnrollmentStatus::Active,
        enrollment_date: String::new(),
        progress: 0.0,
    }
}

#[test]
fn default_state_is_empty() {
    let state = CatalogState::default();
    assert!(state.courses.is_empty());
    assert!(!state.loading);
    assert!(state.enroll_pending.is_empty());
    assert!(state.error.is_none());
}

#[test]
fn is_enrolled_matches_enrollment_course_ids() {
    let state = CatalogState {
        enrollments: vec![enrollment(1, 42)],
        ..CatalogState::default()
    };
    assert!(state.is_enrolled(42));
    assert!(!state.is_enrolled(7));
}

#[test]
fn filtered_courses_empty_query_returns_all() {
    let state = CatalogState {
        courses: vec![course(1, "Rust", "systems"), course(2, "Python", "scripts")],
        ..CatalogState::default()
    };
    assert_eq!(state.filtered_courses("  ").len(), 2);
}

#[test]
fn filtered_courses_matches_title_case_insensitively() {
    let state = CatalogState {
        courses: vec![course(1, "Rust for the Web", "wasm"), course(2, "Python", "scripts")],
        ..CatalogState::default()
    };
    let hits = state.filtered_courses("rust");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 1);
}

#[test]
fn filtered_courses_matches_description() {
    let state = CatalogState {
        courses: vec![course(1, "Rust", "build WASM front-ends"), course(2, "Python", "scripts")],
        ..CatalogState::default()
    };
    assert_eq!(state.filtered_courses("wasm").len(), 1);
}
