//! Login page: username-or-email + password against the JWT token endpoint.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::state::auth::AuthState;

/// Both fields are required; identity is trimmed, the password is not.
fn validate_login_input(identity: &str, password: &str) -> Result<(String, String), &'static str> {
    let identity = identity.trim();
    if identity.is_empty() || password.is_empty() {
        return Err("Enter your username (or email) and password.");
    }
    Ok((identity.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let identity = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (identity_value, password_value) = match validate_login_input(&identity.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let auth = expect_context::<RwSignal<AuthState>>();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&identity_value, &password_value).await {
                    Ok(pair) => {
                        crate::util::token::store(&pair);
                        let user = crate::net::api::fetch_profile().await;
                        auth.set(AuthState { user, loading: false });
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/");
                        }
                    }
                    Err(e) => {
                        info.set(format!("Sign-in failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (identity_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"LMS"</h1>
                <p class="login-card__subtitle">"Sign in to keep learning"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="username or you@example.com"
                        prop:value=move || identity.get()
                        on:input=move |ev| identity.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "New here? "
                    <a href="/register">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
