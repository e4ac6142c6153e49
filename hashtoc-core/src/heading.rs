//! Heading index
//!
//! One forward pass over the lines collects a [`Heading`] per heading line, in source order. The
//! anchor id is computed here, once, so the table of contents and the body agree on it.
//!
//! The index is flat: a heading only records its depth, never a parent. Nesting is a display
//! concern of the TOC renderer.

use crate::anchor::anchor_id;
use crate::classify::{classify_line, HeadingMarker, LineKind};
use crate::line::Line;

/// A heading line, resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Index of the line this heading was read from
    pub source_index: usize,
    /// Number of leading markers, at least 1
    pub depth: usize,
    /// The line with its marker run removed
    pub title: String,
    pub anchor_id: String,
}

/// Every heading of one document, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadingIndex {
    headings: Vec<Heading>,
}

impl HeadingIndex {
    /// Build the index for `lines`, using `marker` to recognise headings.
    pub fn build(lines: &[Line], marker: HeadingMarker) -> Self {
        let headings = lines
            .iter()
            .filter_map(|line| match classify_line(line.raw_text(), marker) {
                LineKind::Heading { depth, title } => Some(Heading {
                    source_index: line.index(),
                    depth,
                    title: title.to_string(),
                    anchor_id: anchor_id(line.index(), line.raw_text()),
                }),
                LineKind::Text => None,
            })
            .collect();

        HeadingIndex { headings }
    }

    pub fn headings(&self) -> &[Heading] {
        &self.headings
    }

    pub fn len(&self) -> usize {
        self.headings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Heading> {
        self.headings.iter()
    }
}

impl<'a> IntoIterator for &'a HeadingIndex {
    type Item = &'a Heading;
    type IntoIter = std::slice::Iter<'a, Heading>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
