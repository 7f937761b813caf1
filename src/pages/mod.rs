//! Route components.

pub mod admin;
pub mod catalog;
pub mod content;
pub mod course;
pub mod dashboard;
pub mod leaderboard;
pub mod login;
pub mod module;
pub mod params;
pub mod register;
