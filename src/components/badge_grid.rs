//! Grid of earnable badges, dimming the unearned ones.

use leptos::prelude::*;

use crate::net::types::Badge;

#[component]
pub fn BadgeGrid(badges: Vec<Badge>) -> impl IntoView {
    view! {
        <div class="badge-grid">
            {badges
                .into_iter()
                .map(|badge| {
                    view! {
                        <div class="badge-grid__item" class:badge-grid__item--locked=!badge.earned title=badge.description.clone()>
                            <span class="badge-grid__icon" aria-hidden="true">{badge.icon.clone()}</span>
                            <span class="badge-grid__name">{badge.name.clone()}</span>
                            <span class="badge-grid__reward">{format!("+{} XP", badge.xp_reward)}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
