use super::*;

#[test]
fn fill_style_rounds_and_clamps() {
    assert_eq!(fill_style(33.4), "width: 33%");
    assert_eq!(fill_style(150.0), "width: 100%");
    assert_eq!(fill_style(-1.0), "width: 0%");
}
