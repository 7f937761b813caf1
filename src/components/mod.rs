//! Reusable UI components.

pub mod badge_grid;
pub mod confirm_dialog;
pub mod course_card;
pub mod leaderboard_table;
pub mod progress_bar;
pub mod streak_flame;
pub mod user_picker;
pub mod xp_bar;
