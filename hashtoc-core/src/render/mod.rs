//! HTML rendering
//!
//! The two fragments are rendered independently from the same [`HeadingIndex`](crate::HeadingIndex)
//! and then dropped into the fixed page template.
//!
//! | Input | HTML |
//! |-------|------|
//! | Heading (TOC) | `<div><a class="section_link" href="#id">-- title</a></div>` |
//! | Heading (body) | `<div><a name="id">title</a></div>` |
//! | Text line | `<div>text</div>` |

pub mod body;
pub mod document;
pub mod toc;

pub use body::render_body;
pub use document::{assemble_document, SectionLabels};
pub use toc::render_toc;
