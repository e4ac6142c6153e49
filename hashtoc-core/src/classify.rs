//! Line Classification
//!
//! A line is a heading when it starts with one or more heading markers. The length of that run is
//! the heading depth, and whatever follows the run is the title, kept verbatim (no separating space
//! is required and surrounding whitespace is not trimmed).
//!
//! Classification is total: every line is either a heading or text.

use std::fmt;

/// The character whose leading run marks a heading line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeadingMarker(char);

impl HeadingMarker {
    pub const fn new(marker: char) -> Self {
        HeadingMarker(marker)
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl Default for HeadingMarker {
    fn default() -> Self {
        HeadingMarker('#')
    }
}

impl fmt::Display for HeadingMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<char> for HeadingMarker {
    fn from(marker: char) -> Self {
        HeadingMarker(marker)
    }
}

/// The result of classifying one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `depth` markers followed by `title`
    Heading { depth: usize, title: &'a str },
    /// Anything that does not start with the marker
    Text,
}

impl LineKind<'_> {
    pub fn is_heading(&self) -> bool {
        matches!(self, LineKind::Heading { .. })
    }
}

/// Classify a raw line against `marker`.
pub fn classify_line(raw: &str, marker: HeadingMarker) -> LineKind<'_> {
    let marker = marker.as_char();
    let title = raw.trim_start_matches(marker);
    let run_len = raw.len() - title.len();

    if run_len == 0 {
        return LineKind::Text;
    }

    LineKind::Heading {
        depth: run_len / marker.len_utf8(),
        title,
    }
}
