//! Table of contents fragment
//!
//! One self-contained block per heading, concatenated without separators. The link text is `depth`
//! dashes, a space, then the title.

use crate::heading::{Heading, HeadingIndex};

/// Render every heading of `index` as a navigation link, indented with `dash`.
pub fn render_toc(index: &HeadingIndex, dash: char) -> String {
    let mut out = String::new();
    for heading in index {
        push_entry(&mut out, heading, dash);
    }
    out
}

fn push_entry(out: &mut String, heading: &Heading, dash: char) {
    out.push_str("<div><a class=\"section_link\" href=\"#");
    out.push_str(&heading.anchor_id);
    out.push_str("\">");
    out.extend(std::iter::repeat(dash).take(heading.depth));
    out.push(' ');
    out.push_str(&heading.title);
    out.push_str("</a></div>");
}
