//! Dashboard page: the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Role-gated: students get enrolled courses with progress plus the
//! gamification widgets; teachers get the courses they teach; admins get a
//! link into the moderation page. Requests enrollment/gamification data on
//! mount and coordinates logout (token clear + enrollment-cache flush).

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::badge_grid::BadgeGrid;
use crate::components::course_card::CourseCard;
use crate::components::progress_bar::ProgressBar;
use crate::components::streak_flame::StreakFlame;
use crate::components::xp_bar::XpBar;
use crate::net::types::{Certificate, Role};
use crate::state::auth::AuthState;
use crate::state::catalog::CatalogState;
use crate::state::gamification::GamificationState;
use crate::state::ui::{DashboardTab, UiState};
use crate::util::format;

/// Heading per role; the generic greeting covers the not-yet-loaded case.
fn dashboard_heading(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Student) => "My Learning",
        Some(Role::Teacher) => "My Courses",
        Some(Role::Admin) => "Platform Overview",
        None => "Dashboard",
    }
}

/// Tabs a role may see. Only students carry progress/badge/certificate
/// tabs; everyone has the course list.
fn visible_tabs(role: Option<Role>) -> &'static [DashboardTab] {
    match role {
        Some(Role::Student) => &[
            DashboardTab::Courses,
            DashboardTab::Progress,
            DashboardTab::Badges,
            DashboardTab::Certificates,
        ],
        _ => &[DashboardTab::Courses],
    }
}

fn tab_label(tab: DashboardTab) -> &'static str {
    match tab {
        DashboardTab::Courses => "Courses",
        DashboardTab::Progress => "Progress",
        DashboardTab::Badges => "Badges",
        DashboardTab::Certificates => "Certificates",
    }
}

/// Dashboard page — role-gated landing with course and gamification views.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let gamification = expect_context::<RwSignal<GamificationState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let certificates = RwSignal::new(Vec::<Certificate>::new());

    // Redirect to login if not authenticated.
    let navigate_login = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate_login("/login", NavigateOptions::default());
        }
    });

    // Request the dashboard data once the session is resolved.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        let state = auth.get();
        if requested.get() || state.loading || state.user.is_none() {
            return;
        }
        requested.set(true);
        catalog.update(|s| s.loading = true);
        gamification.update(|s| s.loading = true);

        #[cfg(feature = "hydrate")]
        {
            let is_student = state.is_student();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_enrollments().await {
                    Ok(enrollments) => catalog.update(|s| {
                        s.enrollments = enrollments;
                        s.loading = false;
                    }),
                    Err(e) => catalog.update(|s| {
                        s.error = Some(e);
                        s.loading = false;
                    }),
                }
                if is_student {
                    let summary = crate::net::api::fetch_gamification_summary().await;
                    gamification.update(|s| {
                        s.summary = summary;
                        s.loading = false;
                    });
                    if let Ok(earned) = crate::net::api::fetch_certificates().await {
                        certificates.set(earned);
                    }
                } else {
                    gamification.update(|s| s.loading = false);
                }
                // Teachers and admins browse course inventory, not
                // enrollments.
                if !is_student {
                    if let Ok(courses) = crate::net::api::fetch_courses().await {
                        catalog.update(|s| s.courses = courses);
                    }
                }
            });
        }
    });

    let on_logout = move |_| {
        crate::util::token::clear();
        crate::app::navigation_resolver().cache().invalidate_all();
        auth.set(AuthState {
            user: None,
            loading: false,
        });
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    let role = move || auth.get().role();
    let self_name = move || {
        auth.get()
            .user
            .map(|user| user.display_name())
            .unwrap_or_else(|| "me".to_owned())
    };

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header toolbar">
                    <span class="toolbar__title">{move || dashboard_heading(role())}</span>
                    <span class="toolbar__divider" aria-hidden="true"></span>
                    <a class="btn" href="/app/courses">"Browse Catalog"</a>
                    <a class="btn" href="/app/leaderboard">"Leaderboard"</a>
                    <Show when=move || auth.get().is_admin()>
                        <a class="btn toolbar__admin" href="/app/admin">"Moderation"</a>
                    </Show>

                    <span class="toolbar__spacer"></span>

                    <button
                        class="btn toolbar__dark-toggle"
                        on:click=move |_| {
                            let current = ui.get().dark_mode;
                            let next = crate::util::dark_mode::toggle(current);
                            ui.update(|u| u.dark_mode = next);
                        }
                        title="Toggle dark mode"
                    >
                        {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                    </button>

                    <span class="toolbar__self">{self_name}</span>

                    <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </header>

                <Show when=move || auth.get().is_student()>
                    <section class="dashboard-page__gamification">
                        {move || {
                            gamification
                                .get()
                                .summary
                                .map(|summary| {
                                    view! {
                                        <XpBar xp=summary.xp level=summary.level/>
                                        <StreakFlame
                                            current=summary.current_streak
                                            longest=summary.longest_streak
                                        />
                                    }
                                })
                        }}
                    </section>
                </Show>

                <nav class="dashboard-page__tabs">
                    {move || {
                        visible_tabs(role())
                            .iter()
                            .map(|&tab| {
                                view! {
                                    <button
                                        class="tab"
                                        class:tab--active=move || ui.get().dashboard_tab == tab
                                        on:click=move |_| ui.update(|u| u.dashboard_tab = tab)
                                    >
                                        {tab_label(tab)}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </nav>

                <Show when=move || catalog.get().error.is_some()>
                    <p class="dashboard-page__error">
                        {move || catalog.get().error.unwrap_or_default()}
                    </p>
                </Show>

                <Show when=move || ui.get().dashboard_tab == DashboardTab::Courses>
                    <div class="dashboard-page__grid">
                        <Show
                            when=move || !catalog.get().loading
                            fallback=move || view! { <p>"Loading courses..."</p> }
                        >
                            <Show
                                when=move || auth.get().is_student()
                                fallback=move || {
                                    view! {
                                        <div class="dashboard-page__cards">
                                            {move || {
                                                catalog
                                                    .get()
                                                    .courses
                                                    .into_iter()
                                                    .map(|course| view! { <CourseCard course=course/> })
                                                    .collect::<Vec<_>>()
                                            }}
                                        </div>
                                    }
                                }
                            >
                                <div class="dashboard-page__cards">
                                    {move || {
                                        catalog
                                            .get()
                                            .enrollments
                                            .into_iter()
                                            .map(|enrollment| {
                                                view! {
                                                    <CourseCard
                                                        course=enrollment.course
                                                        enrolled=true
                                                        progress=Some(enrollment.progress)
                                                    />
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    }}
                                </div>
                            </Show>
                        </Show>
                    </div>
                </Show>

                <Show when=move || ui.get().dashboard_tab == DashboardTab::Progress>
                    <div class="dashboard-page__progress">
                        {move || {
                            catalog
                                .get()
                                .enrollments
                                .into_iter()
                                .map(|enrollment| {
                                    view! {
                                        <div class="progress-row">
                                            <span class="progress-row__title">
                                                {enrollment.course.title.clone()}
                                            </span>
                                            <ProgressBar progress=enrollment.progress/>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>

                <Show when=move || ui.get().dashboard_tab == DashboardTab::Badges>
                    <div class="dashboard-page__badges">
                        {move || {
                            let badges = gamification.get().summary.map(|s| s.badges).unwrap_or_default();
                            view! { <BadgeGrid badges=badges/> }
                        }}
                    </div>
                </Show>

                <Show when=move || ui.get().dashboard_tab == DashboardTab::Certificates>
                    <div class="dashboard-page__certificates">
                        {move || {
                            certificates
                                .get()
                                .into_iter()
                                .map(|certificate| {
                                    view! {
                                        <div class="certificate-row">
                                            <span class="certificate-row__title">
                                                {certificate.course.title.clone()}
                                            </span>
                                            <span class="certificate-row__date">
                                                {format::date(&certificate.issue_date).to_owned()}
                                            </span>
                                            <span class="certificate-row__code">
                                                {certificate.verification_code.clone()}
                                            </span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </div>
        </Show>
    }
}
