//! Reusable card component for course list items.
//!
//! DESIGN
//! ======
//! The card is an anchor whose static `href` is the catalog route, so it
//! works before hydration. On click the enrollment-aware resolver decides
//! the real destination (catalog vs. "my courses") and navigates there.

#[cfg(test)]
#[path = "course_card_test.rs"]
mod course_card_test;

use leptos::prelude::*;

use crate::nav::paths;
use crate::net::types::Course;
use crate::util::format;

/// A clickable card representing a course.
#[component]
pub fn CourseCard(
    course: Course,
    #[prop(optional)] enrolled: bool,
    #[prop(optional_no_strip, into)] progress: Option<f64>,
    #[prop(optional_no_strip, into)] on_enroll: Option<Callback<i64>>,
) -> impl IntoView {
    let course_id = course.id;
    let fallback_href = paths::catalog_path(course_id, None, None);

    let on_open = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            // Fetched inside the task so the handler stays `Send`.
            let path = crate::app::navigation_resolver().resolve_course(course_id).await;
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&path);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = course_id;
    };

    let on_enroll_click = Callback::new(move |()| {
        if let Some(on_enroll) = on_enroll.as_ref() {
            on_enroll.run(course_id);
        }
    });

    view! {
        <a class="course-card" class:course-card--enrolled=enrolled href=fallback_href on:click=on_open>
            <span class="course-card__title">{course.title.clone()}</span>
            <span class="course-card__teacher">{course.teacher.display_name()}</span>
            <span class="course-card__price">{format::price(&course.price)}</span>
            <p class="course-card__description">{course.description.clone()}</p>
            <Show when=move || progress.is_some()>
                <span class="course-card__progress">
                    {move || format::percent(progress.unwrap_or_default())}
                </span>
            </Show>
            <Show when=move || !enrolled && on_enroll.is_some()>
                <button
                    class="btn course-card__enroll"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        ev.stop_propagation();
                        on_enroll_click.run(());
                    }
                >
                    "Enroll"
                </button>
            </Show>
        </a>
    }
}
