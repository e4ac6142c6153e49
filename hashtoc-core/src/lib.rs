//! Plain text with `#` headings to navigable HTML
//!
//!     A line starting with a run of `#` is a heading, the run length is its depth. The converter
//!     turns such a document into a single HTML page: a table of contents linking to every heading,
//!     followed by the full text where heading lines carry the link targets.
//!
//! Architecture
//!
//!     The conversion is a forward-only pipeline over an already decoded line sequence:
//!
//!     lines ─▶ classify ─▶ heading index ─┬─▶ toc fragment ──┬─▶ document
//!                                         └─▶ body fragment ─┘
//!
//!     .
//!     ├── line.rs          # Line type and the text → lines splitter
//!     ├── classify.rs      # heading marker and line classification
//!     ├── anchor.rs        # anchor id generation
//!     ├── heading.rs       # Heading records and the HeadingIndex builder
//!     ├── render
//!     │   ├── toc.rs       # table of contents fragment
//!     │   ├── body.rs      # body fragment
//!     │   └── document.rs  # fixed template assembly
//!     ├── converter.rs     # DocumentConverter trait and HtmlConverter
//!     └── service          # upload handling and response envelopes
//!
//!     This is a pure lib: nothing here prints, reads the environment or exits the process. The
//!     shell concerns live in hashtoc-cli.
//!
//! Conversion is total
//!
//!     Every finite line sequence converts, the empty one included. Failures only exist in the
//!     service layer, where uploads are checked for content type and decoded.
//!
//!     Source text is passed through unescaped, markup in the input ends up as markup in the output.

pub mod anchor;
pub mod classify;
pub mod converter;
pub mod heading;
pub mod line;
pub mod render;
pub mod service;

pub use classify::{classify_line, HeadingMarker, LineKind};
pub use converter::{convert_lines, ConverterOptions, DocumentConverter, HtmlConverter};
pub use heading::{Heading, HeadingIndex};
pub use line::{lines_from, split_lines, Line};
pub use render::SectionLabels;
