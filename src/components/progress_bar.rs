//! Horizontal progress bar for course completion.

#[cfg(test)]
#[path = "progress_bar_test.rs"]
mod progress_bar_test;

use leptos::prelude::*;

use crate::util::format;

/// Width style for a completion percentage in `0.0..=100.0`.
fn fill_style(progress: f64) -> String {
    format!("width: {}%", progress.clamp(0.0, 100.0).round())
}

/// Labeled progress bar.
#[component]
pub fn ProgressBar(progress: f64) -> impl IntoView {
    view! {
        <div class="progress-bar" role="progressbar">
            <div class="progress-bar__fill" style=fill_style(progress)></div>
            <span class="progress-bar__label">{format::percent(progress)}</span>
        </div>
    }
}
