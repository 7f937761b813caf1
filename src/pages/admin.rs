//! Admin moderation page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Admin-only. Two panels: user moderation (search-select users, then bulk
//! role change or delete) and course moderation (delete any course).
//! Destructive actions route through the confirmation dialog. Deleting a
//! course also evicts it from the enrollment cache so navigation resolves
//! against fresh data.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::user_picker::UserPicker;
use crate::net::types::{Course, Role, User};
use crate::state::auth::AuthState;

fn parse_role_choice(raw: &str) -> Option<Role> {
    match raw {
        "student" => Some(Role::Student),
        "teacher" => Some(Role::Teacher),
        "admin" => Some(Role::Admin),
        _ => None,
    }
}

fn role_choice_label(role: Role) -> &'static str {
    match role {
        Role::Student => "Student",
        Role::Teacher => "Teacher",
        Role::Admin => "Admin",
    }
}

fn delete_users_message(count: usize) -> String {
    if count == 1 {
        "Delete 1 user? Their enrollments and progress go with them.".to_owned()
    } else {
        format!("Delete {count} users? Their enrollments and progress go with them.")
    }
}

fn delete_course_message(title: &str) -> String {
    format!("Delete \"{title}\"? All enrollments in it are removed.")
}

/// Admin page — user and course moderation. Non-admins are sent back to
/// the dashboard.
#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let selected = RwSignal::new(Vec::<User>::new());
    let role_choice = RwSignal::new(Role::Student);
    let courses = RwSignal::new(Vec::<Course>::new());
    let status = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    let confirm_user_delete = RwSignal::new(false);
    let confirm_course_delete = RwSignal::new(None::<Course>);

    // Only admins belong here.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && !state.is_admin() {
            navigate("/", NavigateOptions::default());
        }
    });

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() || !auth.get().is_admin() {
            return;
        }
        requested.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_courses().await {
                Ok(list) => courses.set(list),
                Err(e) => error.set(Some(e)),
            }
        });
    });

    let on_apply_role = move |_| {
        let users = selected.get();
        if users.is_empty() {
            return;
        }
        let role = role_choice.get();
        status.set(None);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let mut changed = 0_usize;
            for user in users {
                match crate::net::api::set_user_role(user.id, role).await {
                    Ok(_) => changed += 1,
                    Err(e) => {
                        error.set(Some(e));
                        break;
                    }
                }
            }
            if changed > 0 {
                status.set(Some(format!(
                    "Changed {changed} user(s) to {}",
                    role_choice_label(role)
                )));
                selected.set(Vec::new());
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (users, role);
    };

    let on_confirm_user_delete = Callback::new(move |()| {
        confirm_user_delete.set(false);
        let users = selected.get();
        status.set(None);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let mut removed = 0_usize;
            for user in users {
                match crate::net::api::delete_user(user.id).await {
                    Ok(()) => removed += 1,
                    Err(e) => {
                        error.set(Some(e));
                        break;
                    }
                }
            }
            if removed > 0 {
                status.set(Some(format!("Deleted {removed} user(s)")));
                selected.set(Vec::new());
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = users;
    });

    let on_confirm_course_delete = Callback::new(move |()| {
        let Some(course) = confirm_course_delete.get() else {
            return;
        };
        confirm_course_delete.set(None);
        status.set(None);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_course(course.id).await {
                Ok(()) => {
                    // Fetched inside the task; the resolver is not `Send`.
                    crate::app::navigation_resolver().cache().invalidate(course.id);
                    courses.update(|list| list.retain(|c| c.id != course.id));
                    status.set(Some(format!("Deleted \"{}\"", course.title)));
                }
                Err(e) => error.set(Some(e)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = course;
    });

    view! {
        <div class="admin-page">
            <header class="admin-page__header toolbar">
                <a class="btn" href="/">"Dashboard"</a>
                <span class="toolbar__title">"Moderation"</span>
            </header>

            <Show when=move || status.get().is_some()>
                <p class="admin-page__status">{move || status.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || error.get().is_some()>
                <p class="admin-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <section class="admin-page__users">
                <h2>"Users"</h2>
                <UserPicker selected=selected/>
                <div class="admin-page__user-actions">
                    <select
                        class="admin-page__role-select"
                        on:change=move |ev| {
                            if let Some(role) = parse_role_choice(&event_target_value(&ev)) {
                                role_choice.set(role);
                            }
                        }
                    >
                        <option value="student" selected=move || role_choice.get() == Role::Student>
                            "Student"
                        </option>
                        <option value="teacher" selected=move || role_choice.get() == Role::Teacher>
                            "Teacher"
                        </option>
                        <option value="admin" selected=move || role_choice.get() == Role::Admin>
                            "Admin"
                        </option>
                    </select>
                    <button
                        class="btn"
                        disabled=move || selected.get().is_empty()
                        on:click=on_apply_role
                    >
                        "Apply role"
                    </button>
                    <button
                        class="btn btn--danger"
                        disabled=move || selected.get().is_empty()
                        on:click=move |_| confirm_user_delete.set(true)
                    >
                        "Delete selected"
                    </button>
                </div>
            </section>

            <section class="admin-page__courses">
                <h2>"Courses"</h2>
                <ul class="admin-page__course-list">
                    {move || {
                        courses
                            .get()
                            .into_iter()
                            .map(|course| {
                                let pending = course.clone();
                                view! {
                                    <li class="admin-page__course">
                                        <span class="admin-page__course-title">
                                            {course.title.clone()}
                                        </span>
                                        <span class="admin-page__course-teacher">
                                            {course.teacher.display_name()}
                                        </span>
                                        <button
                                            class="btn btn--danger"
                                            on:click=move |_| {
                                                confirm_course_delete.set(Some(pending.clone()));
                                            }
                                        >
                                            "Delete"
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </section>

            <Show when=move || confirm_user_delete.get()>
                <ConfirmDialog
                    title="Delete users"
                    message=delete_users_message(selected.get().len())
                    confirm_label="Delete"
                    on_confirm=on_confirm_user_delete
                    on_cancel=Callback::new(move |()| confirm_user_delete.set(false))
                />
            </Show>

            {move || {
                confirm_course_delete
                    .get()
                    .map(|course| {
                        view! {
                            <ConfirmDialog
                                title="Delete course"
                                message=delete_course_message(&course.title)
                                confirm_label="Delete"
                                on_confirm=on_confirm_course_delete
                                on_cancel=Callback::new(move |()| confirm_course_delete.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}
