use super::*;

use crate::net::types::CourseModule;

fn module(id: i64, order: i32) -> CourseModule {
    CourseModule {
        id,
        title: format!("Module {id}"),
        description: None,
        order,
    }
}

#[test]
fn modules_sort_by_order() {
    let sorted = sorted_modules(vec![module(1, 3), module(2, 1), module(3, 2)]);
    let ids: Vec<i64> = sorted.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
}

#[test]
fn id_breaks_order_ties() {
    let sorted = sorted_modules(vec![module(9, 1), module(4, 1)]);
    let ids: Vec<i64> = sorted.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![4, 9]);
}

#[test]
fn module_links_stay_in_area() {
    assert_eq!(module_href(false, 7, 2), "/app/courses/7/modules/2");
    assert_eq!(module_href(true, 7, 2), "/app/my-courses/7/modules/2");
}
