use super::*;

#[test]
fn caption_shows_xp_into_current_level() {
    assert_eq!(xp_caption(240, 3), "Level 3 · 40/100 XP");
}

#[test]
fn caption_at_level_boundary_shows_zero() {
    assert_eq!(xp_caption(200, 3), "Level 3 · 0/100 XP");
}

#[test]
fn caption_clamps_negative_xp() {
    assert_eq!(xp_caption(-5, 1), "Level 1 · 0/100 XP");
}
