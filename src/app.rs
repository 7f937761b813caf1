//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::nav::{EnrollmentCache, NavigationPathResolver};
use crate::pages::admin::AdminPage;
use crate::pages::catalog::CatalogPage;
use crate::pages::content::ContentPage;
use crate::pages::course::CoursePage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::leaderboard::LeaderboardPage;
use crate::pages::login::LoginPage;
use crate::pages::module::ModulePage;
use crate::pages::register::RegisterPage;
use crate::state::auth::AuthState;
use crate::state::catalog::CatalogState;
use crate::state::gamification::GamificationState;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

thread_local! {
    static RESOLVER: NavigationPathResolver = build_resolver();
}

/// Build the navigation resolver over the live API collaborator.
fn build_resolver() -> NavigationPathResolver {
    use futures::FutureExt as _;
    let cache = EnrollmentCache::new(Rc::new(|| crate::net::api::fetch_enrolled_course_ids().boxed_local()));
    NavigationPathResolver::new(Rc::new(cache))
}

/// The shared enrollment-aware resolver. One per thread; the browser has
/// exactly one, so every component sees the same cache. (`Rc` inside keeps
/// it out of Leptos context, which wants `Send + Sync` values.)
pub fn navigation_resolver() -> NavigationPathResolver {
    RESOLVER.with(Clone::clone)
}

/// Root application component.
///
/// Provides all shared state contexts, the enrollment-aware navigation
/// resolver, and client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let auth = RwSignal::new(AuthState::default());
    let catalog = RwSignal::new(CatalogState::default());
    let gamification = RwSignal::new(GamificationState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(catalog);
    provide_context(gamification);
    provide_context(ui);

    // Resolve the session and apply the stored theme once in the browser.
    #[cfg(feature = "hydrate")]
    {
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);

        leptos::task::spawn_local(async move {
            let user = if crate::util::token::has_session() {
                crate::net::api::fetch_profile().await
            } else {
                None
            };
            auth.set(AuthState { user, loading: false });
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/lms-client.css"/>
        <Title text="LMS"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=(StaticSegment("app"), StaticSegment("leaderboard")) view=LeaderboardPage/>
                <Route path=(StaticSegment("app"), StaticSegment("admin")) view=AdminPage/>
                <Route path=(StaticSegment("app"), StaticSegment("courses")) view=CatalogPage/>
                <Route path=(StaticSegment("app"), StaticSegment("courses"), ParamSegment("id")) view=CoursePage/>
                <Route
                    path=(
                        StaticSegment("app"),
                        StaticSegment("courses"),
                        ParamSegment("id"),
                        StaticSegment("modules"),
                        ParamSegment("module_id"),
                    )
                    view=ModulePage
                />
                <Route
                    path=(
                        StaticSegment("app"),
                        StaticSegment("courses"),
                        ParamSegment("id"),
                        StaticSegment("modules"),
                        ParamSegment("module_id"),
                        StaticSegment("content"),
                        ParamSegment("content_id"),
                    )
                    view=ContentPage
                />
                <Route path=(StaticSegment("app"), StaticSegment("my-courses"), ParamSegment("id")) view=CoursePage/>
                <Route
                    path=(
                        StaticSegment("app"),
                        StaticSegment("my-courses"),
                        ParamSegment("id"),
                        StaticSegment("modules"),
                        ParamSegment("module_id"),
                    )
                    view=ModulePage
                />
                <Route
                    path=(
                        StaticSegment("app"),
                        StaticSegment("my-courses"),
                        ParamSegment("id"),
                        StaticSegment("modules"),
                        ParamSegment("module_id"),
                        StaticSegment("content"),
                        ParamSegment("content_id"),
                    )
                    view=ContentPage
                />
            </Routes>
        </Router>
    }
}
