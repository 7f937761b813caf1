use super::*;

#[test]
fn default_ui_state() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert_eq!(state.dashboard_tab, DashboardTab::Courses);
}

#[test]
fn dashboard_tab_default_is_courses() {
    assert_eq!(DashboardTab::default(), DashboardTab::Courses);
}
