//! XP/level widget for the student dashboard.

#[cfg(test)]
#[path = "xp_bar_test.rs"]
mod xp_bar_test;

use leptos::prelude::*;

use crate::state::gamification::{XP_PER_LEVEL, level_progress};

/// `"level 3 · 40/100 XP"` style caption.
fn xp_caption(xp: i64, level: i32) -> String {
    let into_level = xp.max(0) % XP_PER_LEVEL;
    format!("Level {level} · {into_level}/{XP_PER_LEVEL} XP")
}

/// Bar showing progress toward the next level.
#[component]
pub fn XpBar(xp: i64, level: i32) -> impl IntoView {
    let width = format!("width: {}%", (level_progress(xp) * 100.0).round());
    view! {
        <div class="xp-bar">
            <span class="xp-bar__caption">{xp_caption(xp, level)}</span>
            <div class="xp-bar__track">
                <div class="xp-bar__fill" style=width></div>
            </div>
        </div>
    }
}
