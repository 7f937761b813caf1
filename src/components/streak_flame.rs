//! Daily learning streak widget.

#[cfg(test)]
#[path = "streak_flame_test.rs"]
mod streak_flame_test;

use leptos::prelude::*;

/// `"7-day streak (best: 30)"`, or a nudge when the streak is cold.
fn streak_label(current: i32, longest: i32) -> String {
    if current <= 0 {
        "Start a streak today".to_owned()
    } else {
        format!("{current}-day streak (best: {longest})")
    }
}

/// Flame icon with the current/longest streak.
#[component]
pub fn StreakFlame(current: i32, longest: i32) -> impl IntoView {
    view! {
        <div class="streak-flame" class:streak-flame--cold=(current <= 0)>
            <span class="streak-flame__icon" aria-hidden="true">
                {if current > 0 { "🔥" } else { "🪵" }}
            </span>
            <span class="streak-flame__label">{streak_label(current, longest)}</span>
        </div>
    }
}
