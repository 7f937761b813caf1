//! Paginated, debounced multi-select over the user search endpoint.
//!
//! DESIGN
//! ======
//! Each keystroke bumps a generation and schedules a delayed search; a task
//! that wakes (or a response that lands) under a stale generation drops its
//! work. Paging re-queries with the same search term. Selection lives in a
//! signal owned by the parent so the surrounding form can submit it.

#[cfg(test)]
#[path = "user_picker_test.rs"]
mod user_picker_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::util::debounce::Generations;

/// Page size the backend serves for `/api/users/`.
const PAGE_SIZE: u64 = 10;

/// Delay between the last keystroke and the search request.
#[cfg(feature = "hydrate")]
const DEBOUNCE_MS: u32 = 300;

/// Number of pages for a result count. Counts come from the wire as `i64`;
/// anything non-positive renders as a single empty page.
fn total_pages(count: i64) -> u32 {
    let count = u64::try_from(count).unwrap_or(0);
    if count == 0 {
        return 1;
    }
    u32::try_from(count.div_ceil(PAGE_SIZE)).unwrap_or(u32::MAX)
}

/// Add `user` to the selection, or remove it if already selected.
fn toggle_selection(mut selected: Vec<User>, user: &User) -> Vec<User> {
    if let Some(position) = selected.iter().position(|u| u.id == user.id) {
        selected.remove(position);
    } else {
        selected.push(user.clone());
    }
    selected
}

#[component]
pub fn UserPicker(selected: RwSignal<Vec<User>>) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let results = RwSignal::new(Vec::<User>::new());
    let page = RwSignal::new(1_u32);
    let count = RwSignal::new(0_i64);
    let generations = Generations::new();

    #[cfg(feature = "hydrate")]
    let search = {
        let generations = generations.clone();
        move |term: String, target_page: u32, debounce: bool| {
            let generation = generations.next();
            let generations = generations.clone();
            leptos::task::spawn_local(async move {
                if debounce {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(DEBOUNCE_MS))).await;
                    if !generations.is_current(generation) {
                        return;
                    }
                }
                let Ok(found) = crate::net::api::search_users(&term, target_page).await else {
                    return;
                };
                if !generations.is_current(generation) {
                    return;
                }
                count.set(found.count);
                results.set(found.results);
                page.set(target_page);
            });
        }
    };
    #[cfg(not(feature = "hydrate"))]
    let search = {
        let _ = &generations;
        move |_term: String, _target_page: u32, _debounce: bool| {}
    };

    let on_input = {
        let search = search.clone();
        move |ev: leptos::ev::Event| {
            let term = event_target_value(&ev);
            query.set(term.clone());
            search(term, 1, true);
        }
    };

    let on_prev = {
        let search = search.clone();
        move |_| {
            let current = page.get();
            if current > 1 {
                search(query.get(), current - 1, false);
            }
        }
    };
    let on_next = {
        let search = search.clone();
        move |_| {
            let current = page.get();
            if current < total_pages(count.get()) {
                search(query.get(), current + 1, false);
            }
        }
    };

    view! {
        <div class="user-picker">
            <input
                class="user-picker__search"
                type="text"
                placeholder="Search users..."
                prop:value=move || query.get()
                on:input=on_input
            />
            <ul class="user-picker__results">
                {move || {
                    results
                        .get()
                        .into_iter()
                        .map(|user| {
                            let picked = selected.get().iter().any(|u| u.id == user.id);
                            let toggle_user = user.clone();
                            view! {
                                <li
                                    class="user-picker__result"
                                    class:user-picker__result--picked=picked
                                    on:click=move |_| {
                                        selected.update(|s| *s = toggle_selection(std::mem::take(s), &toggle_user));
                                    }
                                >
                                    <span class="user-picker__name">{user.display_name()}</span>
                                    <span class="user-picker__email">{user.email.clone()}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
            <div class="user-picker__pager">
                <button class="btn" on:click=on_prev disabled=move || page.get() <= 1>
                    "Prev"
                </button>
                <span class="user-picker__page">
                    {move || format!("{} / {}", page.get(), total_pages(count.get()))}
                </span>
                <button class="btn" on:click=on_next disabled=move || page.get() >= total_pages(count.get())>
                    "Next"
                </button>
            </div>
            <div class="user-picker__selected">
                {move || {
                    selected
                        .get()
                        .into_iter()
                        .map(|user| {
                            let remove_user = user.clone();
                            view! {
                                <span class="user-picker__chip">
                                    {user.username.clone()}
                                    <button
                                        class="user-picker__chip-remove"
                                        on:click=move |_| {
                                            selected.update(|s| s.retain(|u| u.id != remove_user.id));
                                        }
                                    >
                                        "✕"
                                    </button>
                                </span>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
