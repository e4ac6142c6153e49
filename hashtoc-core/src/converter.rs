//! Converter trait definition and the HTML converter
//!
//! [`DocumentConverter`] is the seam the upload service is written against, so the service can be
//! exercised with any implementation. [`HtmlConverter`] is the real one.

use crate::classify::HeadingMarker;
use crate::heading::HeadingIndex;
use crate::line::Line;
use crate::render::{assemble_document, render_body, render_toc, SectionLabels};

/// Knobs of the HTML conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterOptions {
    pub marker: HeadingMarker,
    /// Character repeated `depth` times in front of each TOC title
    pub toc_dash: char,
    pub labels: SectionLabels,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        ConverterOptions {
            marker: HeadingMarker::default(),
            toc_dash: '-',
            labels: SectionLabels::default(),
        }
    }
}

/// Trait for line-sequence to document converters
///
/// Conversion cannot fail: every line sequence, including the empty one, has a rendering.
pub trait DocumentConverter: Send + Sync {
    /// The name of this converter (e.g., "html")
    fn name(&self) -> &str;

    /// Optional description of this converter
    fn description(&self) -> &str {
        ""
    }

    /// Convert the whole document
    fn convert(&self, lines: &[Line]) -> String;
}

/// Renders a table of contents followed by the anchored text.
#[derive(Debug, Clone, Default)]
pub struct HtmlConverter {
    options: ConverterOptions,
}

impl HtmlConverter {
    pub fn new(options: ConverterOptions) -> Self {
        HtmlConverter { options }
    }

    pub fn options(&self) -> &ConverterOptions {
        &self.options
    }
}

impl DocumentConverter for HtmlConverter {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML page with a table of contents and anchored text"
    }

    fn convert(&self, lines: &[Line]) -> String {
        let index = HeadingIndex::build(lines, self.options.marker);
        let toc = render_toc(&index, self.options.toc_dash);
        let body = render_body(lines, &index);

        log::debug!(
            "converted {} lines, {} headings (marker '{}')",
            lines.len(),
            index.len(),
            self.options.marker
        );

        assemble_document(&toc, &body, &self.options.labels)
    }
}

/// Convert with the default options.
pub fn convert_lines(lines: &[Line]) -> String {
    HtmlConverter::default().convert(lines)
}
