//! Leaderboard page: top learners ranked by XP.

use leptos::prelude::*;

use crate::components::leaderboard_table::LeaderboardTable;
use crate::state::auth::AuthState;
use crate::state::gamification::GamificationState;

/// Leaderboard page — platform-wide XP ranking with the caller's row
/// highlighted.
#[component]
pub fn LeaderboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let gamification = expect_context::<RwSignal<GamificationState>>();
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_leaderboard().await {
                Ok(entries) => gamification.update(|s| s.leaderboard = entries),
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    });

    let self_username = move || auth.get().user.map(|u| u.username);

    view! {
        <div class="leaderboard-page">
            <header class="leaderboard-page__header toolbar">
                <a class="btn" href="/">"Dashboard"</a>
                <span class="toolbar__title">"Leaderboard"</span>
            </header>

            <Show when=move || error.get().is_some()>
                <p class="leaderboard-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p>"Loading ranking..."</p> }
            >
                {move || {
                    view! {
                        <LeaderboardTable
                            entries=gamification.get().leaderboard
                            highlight=self_username()
                        />
                    }
                }}
            </Show>
        </div>
    }
}
