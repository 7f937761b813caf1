//! UI state: dark mode and dashboard tab selection.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Shared UI chrome state.
#[derive(Clone, Debug)]
pub struct UiState {
    pub dark_mode: bool,
    pub dashboard_tab: DashboardTab,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            dark_mode: false,
            dashboard_tab: DashboardTab::Courses,
        }
    }
}

/// Tabs on the dashboard page. Only students see tabs beyond Courses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Courses,
    Progress,
    Badges,
    Certificates,
}
