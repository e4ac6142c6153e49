//! Body fragment
//!
//! Every input line becomes one block on its own output line, in order. Heading lines carry a named
//! anchor with the heading title; every other line is copied verbatim, blank lines included.

use crate::heading::HeadingIndex;
use crate::line::Line;

/// Render `lines`, using `index` (built from the same lines) for the heading blocks.
pub fn render_body(lines: &[Line], index: &HeadingIndex) -> String {
    let mut headings = index.iter().peekable();
    let mut out = String::new();

    for line in lines {
        match headings.next_if(|heading| heading.source_index == line.index()) {
            Some(heading) => {
                out.push_str("<div><a name=\"");
                out.push_str(&heading.anchor_id);
                out.push_str("\">");
                out.push_str(&heading.title);
                out.push_str("</a></div>");
            }
            None => {
                out.push_str("<div>");
                out.push_str(line.raw_text());
                out.push_str("</div>");
            }
        }
        out.push('\n');
    }

    out
}
