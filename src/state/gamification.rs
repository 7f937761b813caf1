//! Gamification state: XP, streaks, badges, leaderboard.

#[cfg(test)]
#[path = "gamification_test.rs"]
mod gamification_test;

use crate::net::types::{GamificationSummary, LeaderboardEntry};

/// XP needed to advance one level.
pub const XP_PER_LEVEL: i64 = 100;

/// Shared gamification state for dashboard widgets and the leaderboard page.
#[derive(Clone, Debug, Default)]
pub struct GamificationState {
    pub summary: Option<GamificationSummary>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub loading: bool,
}

impl GamificationState {
    /// Progress within the current level, in `0.0..=1.0`.
    pub fn level_progress(&self) -> f64 {
        let Some(summary) = &self.summary else {
            return 0.0;
        };
        level_progress(summary.xp)
    }

    /// Count of earned badges.
    pub fn earned_badges(&self) -> usize {
        self.summary
            .as_ref()
            .map_or(0, |s| s.badges.iter().filter(|b| b.earned).count())
    }
}

/// Fraction of the way from the current level to the next.
#[allow(clippy::cast_precision_loss)]
pub fn level_progress(xp: i64) -> f64 {
    let into_level = xp.max(0) % XP_PER_LEVEL;
    into_level as f64 / XP_PER_LEVEL as f64
}
