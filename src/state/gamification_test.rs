use super::*;
use crate::net::types::Badge;

fn badge(code: &str, earned: bool) -> Badge {
    Badge {
        code: code.to_owned(),
        name: code.to_owned(),
        description: String::new(),
        badge_type: "streak".to_owned(),
        icon: "🔥".to_owned(),
        xp_reward: 50,
        earned,
    }
}

#[test]
fn default_state_has_no_summary() {
    let state = GamificationState::default();
    assert!(state.summary.is_none());
    assert!((state.level_progress() - 0.0).abs() < f64::EPSILON);
    assert_eq!(state.earned_badges(), 0);
}

#[test]
fn level_progress_is_fraction_into_level() {
    assert!((level_progress(0) - 0.0).abs() < f64::EPSILON);
    assert!((level_progress(50) - 0.5).abs() < f64::EPSILON);
    assert!((level_progress(250) - 0.5).abs() < f64::EPSILON);
}

#[test]
fn level_progress_clamps_negative_xp() {
    assert!((level_progress(-10) - 0.0).abs() < f64::EPSILON);
}

#[test]
fn earned_badges_counts_only_earned() {
    let state = GamificationState {
        summary: Some(GamificationSummary {
            xp: 120,
            level: 2,
            current_streak: 3,
            longest_streak: 9,
            badges: vec![badge("streak_7", true), badge("streak_30", false)],
        }),
        ..GamificationState::default()
    };
    assert_eq!(state.earned_badges(), 1);
}
