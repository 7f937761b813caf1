use super::*;

#[test]
fn heading_follows_role() {
    assert_eq!(dashboard_heading(Some(Role::Student)), "My Learning");
    assert_eq!(dashboard_heading(Some(Role::Teacher)), "My Courses");
    assert_eq!(dashboard_heading(Some(Role::Admin)), "Platform Overview");
    assert_eq!(dashboard_heading(None), "Dashboard");
}

#[test]
fn students_see_all_tabs() {
    let tabs = visible_tabs(Some(Role::Student));
    assert_eq!(tabs.len(), 4);
    assert_eq!(tabs[0], DashboardTab::Courses);
    assert!(tabs.contains(&DashboardTab::Certificates));
}

#[test]
fn staff_see_only_the_course_tab() {
    assert_eq!(visible_tabs(Some(Role::Teacher)), &[DashboardTab::Courses]);
    assert_eq!(visible_tabs(Some(Role::Admin)), &[DashboardTab::Courses]);
    assert_eq!(visible_tabs(None), &[DashboardTab::Courses]);
}

#[test]
fn tab_labels_are_human_readable() {
    assert_eq!(tab_label(DashboardTab::Courses), "Courses");
    assert_eq!(tab_label(DashboardTab::Progress), "Progress");
    assert_eq!(tab_label(DashboardTab::Badges), "Badges");
    assert_eq!(tab_label(DashboardTab::Certificates), "Certificates");
}
