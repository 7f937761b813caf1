//! Wire DTOs for the LMS REST API.
//!
//! DESIGN
//! ======
//! These types mirror the backend serializers field-for-field so serde
//! round-trips stay lossless. Timestamps and decimal amounts arrive as
//! strings and are kept that way; this client only displays them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role; gates dashboards and moderation surfaces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Teacher,
    Admin,
}

/// An account as served by the users endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub created_at: String,
}

impl User {
    /// Display name: full name when present, username otherwise.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_owned()
        }
    }
}

/// JWT pair returned by the token endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// A course as listed in the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Decimal amount serialized as a string (e.g. `"49.99"`).
    pub price: String,
    pub teacher: User,
    #[serde(default)]
    pub created_at: String,
}

/// An ordered module inside a course.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseModule {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub order: i32,
}

/// Kind of a content item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Video,
    Reading,
}

/// A content item inside a module: a video link or a markdown reading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub id: i64,
    pub title: String,
    pub content_type: ContentKind,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    pub order: i32,
    #[serde(default)]
    pub duration_minutes: i32,
}

/// Enrollment lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    Active,
    Completed,
}

/// A student's enrollment in a course, with computed progress.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: i64,
    pub course: Course,
    pub status: EnrollmentStatus,
    #[serde(default)]
    pub enrollment_date: String,
    /// Completion percentage in `0.0..=100.0`.
    #[serde(default)]
    pub progress: f64,
}

/// A completion certificate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: i64,
    pub course: Course,
    #[serde(default)]
    pub issue_date: String,
    pub verification_code: String,
}

/// An earnable badge, with earned state for the current user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub code: String,
    pub name: String,
    pub description: String,
    pub badge_type: String,
    pub icon: String,
    pub xp_reward: i64,
    #[serde(default)]
    pub earned: bool,
}

/// Gamification snapshot for the current user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamificationSummary {
    pub xp: i64,
    pub level: i32,
    pub current_streak: i32,
    pub longest_streak: i32,
    #[serde(default)]
    pub badges: Vec<Badge>,
}

/// One row of the XP leaderboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: i32,
    pub username: String,
    pub xp: i64,
    pub level: i32,
}

/// DRF-style page envelope for paginated endpoints (user search).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub count: i64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}
