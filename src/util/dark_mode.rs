//! Dark mode preference and `data-theme` application.
//!
//! The stored preference wins; with nothing stored, the system color-scheme
//! preference decides. SSR paths no-op so server rendering stays
//! deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use super::storage;

const STORAGE_KEY: &str = "lms_dark";

/// Read the dark mode preference: stored value first, system preference as
/// the fallback.
pub fn read_preference() -> bool {
    if let Some(stored) = storage::read_item(STORAGE_KEY) {
        return stored == "true";
    }
    system_prefers_dark()
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode, persist the new preference, and return it.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    storage::write_item(STORAGE_KEY, if next { "true" } else { "false" });
    next
}
