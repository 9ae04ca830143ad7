//! Markup helpers shared by the operation views.
//!
//! User-selected text is escaped before it is interpolated into a view.
//! Model output is trusted and goes through the markdown pass untouched.

use pulldown_cmark::{html, Parser};

/// Escape `<` and `&` so selected text cannot inject markup.
///
/// Only these two characters are touched; quotes and `>` pass through.
pub fn safe_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '&' => out.push_str("&amp;"),
            _ => out.push(c),
        }
    }
    out
}

/// Convert a markdown view template into HTML for the panel body.
pub fn render_markdown(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut body_html = String::new();
    html::push_html(&mut body_html, parser);
    body_html
}
