//! Property-based tests for the converter
//!
//! Documents are generated as mixes of heading lines, text lines and blank lines, so every property
//! is checked against inputs where the expected heading set is known up front.

use hashtoc_core::render::{render_body, render_toc};
use hashtoc_core::{convert_lines, lines_from, HeadingIndex, HeadingMarker, Line};
use proptest::prelude::*;
use std::collections::HashSet;

/// A heading line: 1-8 markers and a title that never starts with a marker
fn heading_line_strategy() -> impl Strategy<Value = String> {
    (1usize..8, "([a-zA-Z0-9 ][a-zA-Z0-9 #'.-]{0,20})?")
        .prop_map(|(depth, title)| format!("{}{}", "#".repeat(depth), title))
}

/// A text line: never starts with a marker
fn text_line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ][a-zA-Z0-9 #<>/.-]{0,30}",
        Just(String::new()),
    ]
}

fn document_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![heading_line_strategy(), text_line_strategy()],
        0..30,
    )
}

fn build(texts: &[String]) -> (Vec<Line>, HeadingIndex) {
    let lines = lines_from(texts.iter().cloned());
    let index = HeadingIndex::build(&lines, HeadingMarker::default());
    (lines, index)
}

fn leading_markers(text: &str) -> usize {
    text.chars().take_while(|c| *c == '#').count()
}

proptest! {
    #[test]
    fn toc_has_one_entry_per_heading_line_in_order(texts in document_strategy()) {
        let (_, index) = build(&texts);
        let expected: Vec<usize> = texts
            .iter()
            .enumerate()
            .filter(|(_, text)| text.starts_with('#'))
            .map(|(i, _)| i)
            .collect();

        let indexed: Vec<usize> = index.iter().map(|h| h.source_index).collect();
        prop_assert_eq!(&indexed, &expected);

        let toc = render_toc(&index, '-');
        prop_assert_eq!(toc.matches("class=\"section_link\"").count(), expected.len());
    }

    #[test]
    fn depth_is_the_leading_marker_count(texts in document_strategy()) {
        let (_, index) = build(&texts);
        for heading in &index {
            let raw = &texts[heading.source_index];
            prop_assert_eq!(heading.depth, leading_markers(raw));
            prop_assert_eq!(heading.title.as_str(), &raw[heading.depth..]);
        }
    }

    #[test]
    fn toc_dash_count_equals_depth(texts in document_strategy()) {
        let (_, index) = build(&texts);
        for heading in &index {
            let single = HeadingIndex::build(
                &[Line::new(heading.source_index, texts[heading.source_index].clone())],
                HeadingMarker::default(),
            );
            let entry = render_toc(&single, '-');
            let link_text = entry.split("\">").nth(1).unwrap_or_default();
            prop_assert_eq!(link_text.chars().take_while(|c| *c == '-').count(), heading.depth);
        }
    }

    #[test]
    fn anchor_ids_are_pairwise_distinct(texts in document_strategy()) {
        let (_, index) = build(&texts);
        let ids: HashSet<&str> = index.iter().map(|h| h.anchor_id.as_str()).collect();
        prop_assert_eq!(ids.len(), index.len());
    }

    #[test]
    fn duplicated_headings_keep_distinct_ids(line in heading_line_strategy(), copies in 2usize..6) {
        let texts = vec![line; copies];
        let (_, index) = build(&texts);
        let ids: HashSet<&str> = index.iter().map(|h| h.anchor_id.as_str()).collect();
        prop_assert_eq!(ids.len(), copies);
    }

    #[test]
    fn conversion_is_deterministic(texts in document_strategy()) {
        let lines = lines_from(texts.iter().cloned());
        prop_assert_eq!(convert_lines(&lines), convert_lines(&lines));
    }

    #[test]
    fn body_has_one_block_per_line(texts in document_strategy()) {
        let (lines, index) = build(&texts);
        let body = render_body(&lines, &index);
        let blocks: Vec<&str> = body.lines().collect();

        prop_assert_eq!(blocks.len(), texts.len());
        for (block, text) in blocks.iter().zip(&texts) {
            if !text.starts_with('#') {
                prop_assert_eq!(*block, format!("<div>{text}</div>"));
            }
        }
    }
}
