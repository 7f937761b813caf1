use super::*;

use crate::net::types::{Role, User};

fn course(id: i64) -> Course {
    Course {
        id,
        title: "Intro to Sparrows".to_owned(),
        description: "Field guide basics.".to_owned(),
        price: "19.99".to_owned(),
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

// Call sites hand the optional props over as the values they already hold:
// a bare `f64` progress or the `Option<Callback>` from a role check.
#[test]
fn optional_props_accept_held_values() {
    let props = CourseCardProps::builder()
        .course(course(1))
        .progress(40.0)
        .build();
    assert_eq!(props.progress, Some(40.0));
    assert!(!props.enrolled);

    let props = CourseCardProps::builder()
        .course(course(2))
        .progress(Some(62.5))
        .on_enroll(None::<Callback<i64>>)
        .build();
    assert_eq!(props.progress, Some(62.5));
    assert!(props.on_enroll.is_none());
}
