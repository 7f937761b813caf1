//! Course detail page: description plus the ordered module list.
//!
//! Served under both `/app/courses/:id` and `/app/my-courses/:id`; the
//! pathname decides which area module links stay in so enrolled learners
//! never bounce back into the catalog.

#[cfg(test)]
#[path = "course_test.rs"]
mod course_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_params_map};

use crate::nav::paths;
use crate::net::types::{Course, CourseModule};
use crate::pages::params::{in_my_courses, parse_id};
use crate::util::format;

/// Modules render in their author-assigned order; id breaks ties so the
/// listing is stable when two modules share an order value.
fn sorted_modules(mut modules: Vec<CourseModule>) -> Vec<CourseModule> {
    modules.sort_by_key(|m| (m.order, m.id));
    modules
}

fn module_href(my_courses: bool, course_id: i64, module_id: i64) -> String {
    if my_courses {
        paths::my_courses_path(course_id, Some(module_id), None)
    } else {
        paths::catalog_path(course_id, Some(module_id), None)
    }
}

/// Course page — course summary and its module list.
#[component]
pub fn CoursePage() -> impl IntoView {
    let params = use_params_map();
    let location = use_location();

    let course = RwSignal::new(None::<Course>);
    let modules = RwSignal::new(Vec::<CourseModule>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let course_id = move || parse_id(params.read().get("id"));
    let my_courses = move || in_my_courses(&location.pathname.get());

    let loaded_for = RwSignal::new(None::<i64>);
    Effect::new(move || {
        let Some(id) = course_id() else {
            loading.set(false);
            error.set(Some("Invalid course id".to_owned()));
            return;
        };
        if loaded_for.get_untracked() == Some(id) {
            return;
        }
        loaded_for.set(Some(id));
        loading.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            course.set(crate::net::api::fetch_course(id).await);
            match crate::net::api::fetch_modules(id).await {
                Ok(list) => modules.set(sorted_modules(list)),
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    });

    view! {
        <div class="course-page">
            <header class="course-page__header toolbar">
                <a class="btn" href=move || {
                    if my_courses() { "/" } else { "/app/courses" }
                }>
                    {move || if my_courses() { "Dashboard" } else { "Catalog" }}
                </a>
                <span class="toolbar__title">
                    {move || course.get().map(|c| c.title).unwrap_or_default()}
                </span>
            </header>

            <Show when=move || error.get().is_some()>
                <p class="course-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p>"Loading course..."</p> }
            >
                {move || {
                    course
                        .get()
                        .map(|c| {
                            view! {
                                <section class="course-page__summary">
                                    <p class="course-page__description">{c.description.clone()}</p>
                                    <p class="course-page__meta">
                                        <span>{c.teacher.display_name()}</span>
                                        <span>{format::price(&c.price)}</span>
                                    </p>
                                </section>
                            }
                        })
                }}
                <ol class="course-page__modules">
                    {move || {
                        let area = my_courses();
                        let id = course_id().unwrap_or_default();
                        modules
                            .get()
                            .into_iter()
                            .map(|module| {
                                let href = module_href(area, id, module.id);
                                view! {
                                    <li class="course-page__module">
                                        <a href=href>
                                            <span class="course-page__module-title">
                                                {module.title.clone()}
                                            </span>
                                            {module
                                                .description
                                                .clone()
                                                .map(|d| {
                                                    view! {
                                                        <span class="course-page__module-desc">{d}</span>
                                                    }
                                                })}
                                        </a>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ol>
                <Show when=move || course.get().is_none() && error.get().is_none()>
                    <p>"Course not found."</p>
                </Show>
            </Show>
        </div>
    }
}
