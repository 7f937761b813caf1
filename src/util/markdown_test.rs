use super::*;

#[test]
fn renders_heading_and_paragraph() {
    let html = to_html("# Lesson 1\n\nWelcome.");
    assert!(html.contains("<h1>Lesson 1</h1>"));
    assert!(html.contains("<p>Welcome.</p>"));
}

#[test]
fn renders_tables_extension() {
    let html = to_html("| a | b |\n|---|---|\n| 1 | 2 |");
    assert!(html.contains("<table>"));
}

#[test]
fn renders_strikethrough_extension() {
    let html = to_html("~~old~~ new");
    assert!(html.contains("<del>old</del>"));
}

#[test]
fn empty_input_renders_empty() {
    assert_eq!(to_html(""), "");
}
