//! Course catalog: browse, search, and enroll.
//!
//! Loads the full course list plus the caller's enrollments on mount so the
//! grid can mark already-enrolled courses. Enrolling pushes the new state
//! into the enrollment cache before navigating, so the course page lands in
//! the my-courses area without a refetch.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use leptos::prelude::*;

use crate::components::course_card::CourseCard;
use crate::state::auth::AuthState;
use crate::state::catalog::CatalogState;

fn course_count_label(count: usize) -> String {
    if count == 1 {
        "1 course".to_owned()
    } else {
        format!("{count} courses")
    }
}

/// Catalog page — searchable course grid with enroll actions.
#[component]
pub fn CatalogPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let query = RwSignal::new(String::new());

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        catalog.update(|s| s.loading = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let courses = crate::net::api::fetch_courses().await;
            let enrollments = crate::net::api::fetch_enrollments().await;
            catalog.update(|s| {
                match courses {
                    Ok(list) => s.courses = list,
                    Err(e) => s.error = Some(e),
                }
                if let Ok(list) = enrollments {
                    s.enrollments = list;
                }
                s.loading = false;
            });
        });
    });

    let on_enroll = Callback::new(move |course_id: i64| {
        if catalog.get().enroll_pending.contains(&course_id) {
            return;
        }
        catalog.update(|s| {
            s.enroll_pending.insert(course_id);
        });

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            // The resolver holds `Rc`s, so it is fetched inside the task
            // rather than captured by the `Callback` closure.
            let resolver = crate::app::navigation_resolver();
            let outcome = crate::net::api::enroll(course_id).await;
            match outcome {
                Ok(enrollment) => {
                    resolver.cache().set_known(course_id, true);
                    catalog.update(|s| {
                        s.enroll_pending.remove(&course_id);
                        s.enrollments.push(enrollment);
                    });
                    let target = resolver.resolve_course(course_id).await;
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&target);
                    }
                }
                Err(e) => catalog.update(|s| {
                    s.enroll_pending.remove(&course_id);
                    s.error = Some(e);
                }),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = course_id;
    });

    let visible = move || catalog.get().filtered_courses(&query.get());

    view! {
        <div class="catalog-page">
            <header class="catalog-page__header toolbar">
                <span class="toolbar__title">"Course Catalog"</span>
                <input
                    class="catalog-page__search"
                    type="search"
                    placeholder="Search courses..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <span class="toolbar__spacer"></span>
                <span class="catalog-page__count">
                    {move || course_count_label(visible().len())}
                </span>
                <a class="btn" href="/">"Dashboard"</a>
            </header>

            <Show when=move || catalog.get().error.is_some()>
                <p class="catalog-page__error">
                    {move || catalog.get().error.unwrap_or_default()}
                </p>
            </Show>

            <Show
                when=move || !catalog.get().loading
                fallback=move || view! { <p>"Loading catalog..."</p> }
            >
                <div class="catalog-page__grid">
                    {move || {
                        let state = catalog.get();
                        let is_student = auth.get().is_student();
                        visible()
                            .into_iter()
                            .map(|course| {
                                let enrolled = state.is_enrolled(course.id);
                                let enroll = (is_student && !enrolled).then_some(on_enroll);
                                view! {
                                    <CourseCard
                                        course=course
                                        enrolled=enrolled
                                        on_enroll=enroll
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}
