//! Content page: a single lesson, either a video or a markdown reading.
//!
//! Videos hosted on YouTube are rewritten to their embed form and rendered
//! in an iframe; any other URL goes through a native `<video>` element.
//! Readings are markdown rendered to HTML client-side. Students can mark
//! the lesson complete, which feeds course progress on the backend.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_params_map};

use crate::nav::paths;
use crate::net::types::{Content, ContentKind};
use crate::pages::params::{in_my_courses, parse_id};
use crate::state::auth::AuthState;
use crate::util::markdown;

/// Rewrite a YouTube watch/share URL into its embeddable form. Returns
/// `None` for anything else, which then plays through a `<video>` tag.
fn youtube_embed(url: &str) -> Option<String> {
    let video_id = if let Some(rest) = url.split("youtube.com/watch?v=").nth(1) {
        rest.split('&').next()
    } else if let Some(rest) = url.split("youtu.be/").nth(1) {
        rest.split('?').next()
    } else {
        None
    }?;
    if video_id.is_empty() {
        return None;
    }
    Some(format!("https://www.youtube.com/embed/{video_id}"))
}

fn mark_complete_label(done: bool) -> &'static str {
    if done { "Completed ✓" } else { "Mark complete" }
}

/// Content page — lesson viewer with mark-complete.
#[component]
pub fn ContentPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();
    let location = use_location();

    let content = RwSignal::new(None::<Content>);
    let loading = RwSignal::new(true);
    let completed = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let course_id = move || parse_id(params.read().get("id"));
    let module_id = move || parse_id(params.read().get("module_id"));
    let content_id = move || parse_id(params.read().get("content_id"));
    let my_courses = move || in_my_courses(&location.pathname.get());

    let loaded_for = RwSignal::new(None::<(i64, i64, i64)>);
    Effect::new(move || {
        let (Some(course), Some(module), Some(lesson)) =
            (course_id(), module_id(), content_id())
        else {
            loading.set(false);
            error.set(Some("Invalid content address".to_owned()));
            return;
        };
        if loaded_for.get_untracked() == Some((course, module, lesson)) {
            return;
        }
        loaded_for.set(Some((course, module, lesson)));
        loading.set(true);
        completed.set(false);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            content.set(crate::net::api::fetch_content(course, module, lesson).await);
            loading.set(false);
        });
    });

    let on_mark_complete = move |_| {
        if completed.get() {
            return;
        }
        let (Some(course), Some(module), Some(lesson)) =
            (course_id(), module_id(), content_id())
        else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::mark_content_complete(course, module, lesson).await {
                Ok(()) => completed.set(true),
                Err(e) => error.set(Some(e)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (course, module, lesson);
    };

    let module_href = move || {
        let course = course_id().unwrap_or_default();
        let module = module_id().unwrap_or_default();
        if my_courses() {
            paths::my_courses_path(course, Some(module), None)
        } else {
            paths::catalog_path(course, Some(module), None)
        }
    };

    view! {
        <div class="content-page">
            <header class="content-page__header toolbar">
                <a class="btn" href=module_href>"Back to module"</a>
                <span class="toolbar__title">
                    {move || content.get().map(|c| c.title).unwrap_or_default()}
                </span>
                <span class="toolbar__spacer"></span>
                <Show when=move || auth.get().is_student() && my_courses()>
                    <button
                        class="btn content-page__complete"
                        class:content-page__complete--done=move || completed.get()
                        on:click=on_mark_complete
                        disabled=move || completed.get()
                    >
                        {move || mark_complete_label(completed.get())}
                    </button>
                </Show>
            </header>

            <Show when=move || error.get().is_some()>
                <p class="content-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p>"Loading lesson..."</p> }
            >
                {move || {
                    content
                        .get()
                        .map(|lesson| match lesson.content_type {
                            ContentKind::Video => {
                                let url = lesson.url.unwrap_or_default();
                                match youtube_embed(&url) {
                                    Some(embed) => view! {
                                        <div class="content-page__video">
                                            <iframe
                                                src=embed
                                                allowfullscreen=true
                                                title=lesson.title.clone()
                                            ></iframe>
                                        </div>
                                    }
                                    .into_any(),
                                    None => view! {
                                        <div class="content-page__video">
                                            <video src=url controls=true></video>
                                        </div>
                                    }
                                    .into_any(),
                                }
                            }
                            ContentKind::Reading => {
                                let html = markdown::to_html(
                                    lesson.text.as_deref().unwrap_or_default(),
                                );
                                view! {
                                    <article
                                        class="content-page__reading markdown"
                                        inner_html=html
                                    ></article>
                                }
                                .into_any()
                            }
                        })
                }}
            </Show>
        </div>
    }
}
