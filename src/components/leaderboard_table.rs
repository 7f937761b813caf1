//! XP leaderboard table, highlighting the current user's row.

#[cfg(test)]
#[path = "leaderboard_table_test.rs"]
mod leaderboard_table_test;

use leptos::prelude::*;

use crate::net::types::LeaderboardEntry;

/// Medal for podium ranks, plain rank number otherwise.
fn rank_display(rank: i32) -> String {
    match rank {
        1 => "🥇".to_owned(),
        2 => "🥈".to_owned(),
        3 => "🥉".to_owned(),
        other => other.to_string(),
    }
}

#[component]
pub fn LeaderboardTable(entries: Vec<LeaderboardEntry>, #[prop(optional_no_strip, into)] highlight: Option<String>) -> impl IntoView {
    view! {
        <table class="leaderboard">
            <thead>
                <tr>
                    <th>"Rank"</th>
                    <th>"Learner"</th>
                    <th>"Level"</th>
                    <th>"XP"</th>
                </tr>
            </thead>
            <tbody>
                {entries
                    .into_iter()
                    .map(|entry| {
                        let is_self = highlight.as_deref() == Some(entry.username.as_str());
                        view! {
                            <tr class:leaderboard__row--self=is_self>
                                <td class="leaderboard__rank">{rank_display(entry.rank)}</td>
                                <td>{entry.username.clone()}</td>
                                <td>{entry.level}</td>
                                <td>{entry.xp}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
