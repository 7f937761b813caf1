//! Markdown rendering for reading content.
//!
//! Reading items arrive as markdown text; they render to HTML injected via
//! `inner_html`. The backend is the only author of this text, so rendering
//! is not sandboxed beyond what `pulldown-cmark` itself produces.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{Options, Parser, html};

/// Render markdown to an HTML string.
pub fn to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
