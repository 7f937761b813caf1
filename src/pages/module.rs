//! Module page: ordered content listing within one course module.

#[cfg(test)]
#[path = "module_test.rs"]
mod module_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_params_map};

use crate::nav::paths;
use crate::net::types::{Content, ContentKind};
use crate::pages::params::{in_my_courses, parse_id};
use crate::util::format;

fn sorted_contents(mut contents: Vec<Content>) -> Vec<Content> {
    contents.sort_by_key(|c| (c.order, c.id));
    contents
}

fn content_icon(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Video => "▶",
        ContentKind::Reading => "¶",
    }
}

fn content_href(my_courses: bool, course_id: i64, module_id: i64, content_id: i64) -> String {
    if my_courses {
        paths::my_courses_path(course_id, Some(module_id), Some(content_id))
    } else {
        paths::catalog_path(course_id, Some(module_id), Some(content_id))
    }
}

/// Module page — the ordered list of lessons inside one module.
#[component]
pub fn ModulePage() -> impl IntoView {
    let params = use_params_map();
    let location = use_location();

    let contents = RwSignal::new(Vec::<Content>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let course_id = move || parse_id(params.read().get("id"));
    let module_id = move || parse_id(params.read().get("module_id"));
    let my_courses = move || in_my_courses(&location.pathname.get());

    let loaded_for = RwSignal::new(None::<(i64, i64)>);
    Effect::new(move || {
        let (Some(course), Some(module)) = (course_id(), module_id()) else {
            loading.set(false);
            error.set(Some("Invalid module address".to_owned()));
            return;
        };
        if loaded_for.get_untracked() == Some((course, module)) {
            return;
        }
        loaded_for.set(Some((course, module)));
        loading.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_contents(course, module).await {
                Ok(list) => contents.set(sorted_contents(list)),
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    });

    let course_href = move || {
        let id = course_id().unwrap_or_default();
        if my_courses() {
            paths::my_courses_path(id, None, None)
        } else {
            paths::catalog_path(id, None, None)
        }
    };

    view! {
        <div class="module-page">
            <header class="module-page__header toolbar">
                <a class="btn" href=course_href>"Back to course"</a>
                <span class="toolbar__title">"Module contents"</span>
            </header>

            <Show when=move || error.get().is_some()>
                <p class="module-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p>"Loading contents..."</p> }
            >
                <ol class="module-page__contents">
                    {move || {
                        let area = my_courses();
                        let course = course_id().unwrap_or_default();
                        let module = module_id().unwrap_or_default();
                        contents
                            .get()
                            .into_iter()
                            .map(|content| {
                                let href = content_href(area, course, module, content.id);
                                view! {
                                    <li class="module-page__content">
                                        <a href=href>
                                            <span class="module-page__icon" aria-hidden="true">
                                                {content_icon(content.content_type)}
                                            </span>
                                            <span class="module-page__title">
                                                {content.title.clone()}
                                            </span>
                                            <span class="module-page__duration">
                                                {format::duration(content.duration_minutes)}
                                            </span>
                                        </a>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ol>
            </Show>
        </div>
    }
}
