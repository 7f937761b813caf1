//! # lms-client
//!
//! Leptos + WASM frontend for the LMS platform: login/registration,
//! role-based dashboards, course browsing and enrollment, module/content
//! viewing, progress tracking, gamification widgets, and admin moderation.
//!
//! This crate contains pages, components, application state, the REST API
//! layer, and the enrollment-aware navigation core (`nav`). All business
//! rules and persistence live in the remote backend; this is a thin
//! presentation layer over its API.

pub mod app;
pub mod components;
pub mod nav;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
