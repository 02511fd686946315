//! Rich-text flattening.
//!
//! Turns an ordered list of styled fragments into a single string. Wrapping is purely
//! textual: neither fragment text nor link targets are escaped.

use crate::notion::RichText;

/// Concatenate the plain text of every fragment.
pub fn plain_text(fragments: &[RichText]) -> String {
    fragments.iter().map(|f| f.plain_text.as_str()).collect()
}

/// Render fragments as HTML-annotated text.
///
/// Per fragment: bold wraps first, italic wraps the result, and a link wraps everything.
pub fn to_html(fragments: &[RichText]) -> String {
    let mut out = String::new();
    for fragment in fragments {
        out.push_str(&render_fragment(fragment));
    }
    out
}

fn render_fragment(fragment: &RichText) -> String {
    let mut text = fragment.plain_text.clone();
    if fragment.annotations.bold {
        text = format!("<strong>{}</strong>", text);
    }
    if fragment.annotations.italic {
        text = format!("<em>{}</em>", text);
    }
    if let Some(href) = &fragment.href {
        text = format!("<a href=\"{}\">{}</a>", href, text);
    }
    text
}
