//! Input lines
//!
//! The converter works on an ordered sequence of [`Line`]s. Callers that already hold split text
//! use [`lines_from`]; callers holding a decoded document use [`split_lines`].

/// One line of input, as received, with its zero-based position in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    index: usize,
    raw_text: String,
}

impl Line {
    pub fn new(index: usize, raw_text: impl Into<String>) -> Self {
        Line {
            index,
            raw_text: raw_text.into(),
        }
    }

    /// Position of this line in the original sequence
    pub fn index(&self) -> usize {
        self.index
    }

    /// The line exactly as received, marker characters included
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }
}

/// Number already split texts in order.
pub fn lines_from<I, S>(texts: I) -> Vec<Line>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    texts
        .into_iter()
        .enumerate()
        .map(|(index, text)| Line::new(index, text))
        .collect()
}

/// Split decoded text on CRLF, CR or LF.
///
/// CRLF is a single boundary. Empty lines in the middle are kept, a terminator at the very end
/// does not open another line, and the empty string has no lines at all.
pub fn split_lines(text: &str) -> Vec<Line> {
    let mut pieces = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        match rest.find(['\r', '\n']) {
            Some(pos) => {
                pieces.push(&rest[..pos]);
                let terminator_len = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + terminator_len..];
            }
            None => {
                pieces.push(rest);
                break;
            }
        }
    }

    lines_from(pieces)
}
