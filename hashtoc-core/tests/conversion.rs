//! End-to-end conversion tests
//!
//! Full documents go through `HtmlConverter`; fragments are checked through the public render
//! functions so the surrounding template does not drown the interesting part.

use hashtoc_core::render::{render_body, render_toc};
use hashtoc_core::{
    convert_lines, lines_from, split_lines, ConverterOptions, DocumentConverter, HeadingIndex,
    HeadingMarker, HtmlConverter, SectionLabels,
};
use rstest::rstest;

const STORY: [&str; 4] = [
    "GREATEST MAN IN ALIVE",
    "#Chapter one",
    "this story about awesome dude that call name is Jack",
    "##Jack's characteristics",
];

fn story_index() -> (Vec<hashtoc_core::Line>, HeadingIndex) {
    let lines = lines_from(STORY);
    let index = HeadingIndex::build(&lines, HeadingMarker::default());
    (lines, index)
}

#[test]
fn test_story_headings() {
    let (_, index) = story_index();

    let summary: Vec<_> = index
        .iter()
        .map(|h| (h.source_index, h.depth, h.title.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![(1, 1, "Chapter one"), (3, 2, "Jack's characteristics")]
    );
}

#[test]
fn test_story_toc_fragment() {
    let (_, index) = story_index();
    let toc = render_toc(&index, '-');

    insta::assert_snapshot!(toc, @r##"<div><a class="section_link" href="#1_2220866048102790352">- Chapter one</a></div><div><a class="section_link" href="#3_6359577230196064099">-- Jack's characteristics</a></div>"##);
}

#[test]
fn test_story_body_fragment() {
    let (lines, index) = story_index();
    let body = render_body(&lines, &index);

    insta::assert_snapshot!(body, @r#"
<div>GREATEST MAN IN ALIVE</div>
<div><a name="1_2220866048102790352">Chapter one</a></div>
<div>this story about awesome dude that call name is Jack</div>
<div><a name="3_6359577230196064099">Jack's characteristics</a></div>
"#);
}

#[test]
fn test_story_document() {
    let html = convert_lines(&lines_from(STORY));

    let expected_tail = concat!(
        "<body>\n",
        "<h1>Содержание:</h1>\n",
        "<div><a class=\"section_link\" href=\"#1_2220866048102790352\">- Chapter one</a></div>",
        "<div><a class=\"section_link\" href=\"#3_6359577230196064099\">-- Jack's characteristics</a></div>\n",
        "<h1>Текст:</h1>\n",
        "<div>GREATEST MAN IN ALIVE</div>\n",
        "<div><a name=\"1_2220866048102790352\">Chapter one</a></div>\n",
        "<div>this story about awesome dude that call name is Jack</div>\n",
        "<div><a name=\"3_6359577230196064099\">Jack's characteristics</a></div>\n",
        "</body></html>",
    );
    assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\"><head>\n"));
    assert!(html.ends_with(expected_tail));
}

#[test]
fn test_split_text_matches_pre_split_lines() {
    let text = STORY.join("\r\n");
    assert_eq!(
        convert_lines(&split_lines(&text)),
        convert_lines(&lines_from(STORY))
    );
}

#[test]
fn test_empty_document() {
    let html = convert_lines(&[]);
    assert!(html.contains("<body>\n<h1>Содержание:</h1>\n\n<h1>Текст:</h1>\n</body></html>"));
    assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\"><head>"));
    assert!(!html.contains("<div>"));
}

#[test]
fn test_marker_only_heading() {
    let html = convert_lines(&lines_from(["##"]));

    assert!(html.contains("<div><a class=\"section_link\" href=\"#0_8549837322662196127\">-- </a></div>"));
    assert!(html.contains("<div><a name=\"0_8549837322662196127\"></a></div>"));
}

#[rstest]
#[case::plain("hello", false)]
#[case::blank("", false)]
#[case::leading_space(" #no", false)]
#[case::hash_inside("C# rocks", false)]
#[case::heading("#yes", true)]
#[case::heading_with_space("# yes", true)]
#[case::markers_only("###", true)]
fn test_line_lands_in_toc_only_when_heading(#[case] line: &str, #[case] in_toc: bool) {
    let lines = lines_from([line]);
    let index = HeadingIndex::build(&lines, HeadingMarker::default());
    let toc = render_toc(&index, '-');

    assert_eq!(!toc.is_empty(), in_toc);
    if !in_toc {
        assert_eq!(render_body(&lines, &index), format!("<div>{line}</div>\n"));
    }
}

#[rstest]
#[case("#One", 1)]
#[case("##Two", 2)]
#[case("#####Five", 5)]
#[case("##########Ten", 10)]
fn test_toc_dashes_match_depth(#[case] line: &str, #[case] depth: usize) {
    let lines = lines_from([line]);
    let index = HeadingIndex::build(&lines, HeadingMarker::default());
    let toc = render_toc(&index, '-');

    let dashes = "-".repeat(depth);
    assert!(toc.contains(&format!("\">{dashes} ")));
    assert!(!toc.contains(&format!("\">{dashes}- ")));
}

#[test]
fn test_configured_converter() {
    let converter = HtmlConverter::new(ConverterOptions {
        marker: HeadingMarker::new('%'),
        toc_dash: '>',
        labels: SectionLabels {
            contents: "Contents".to_string(),
            text: "Text".to_string(),
        },
    });

    let html = converter.convert(&lines_from(["%%Setup", "#comment"]));

    assert!(html.contains("<h1>Contents</h1>"));
    assert!(html.contains("<h1>Text</h1>"));
    assert!(html.contains("\">>> Setup</a></div>"));
    assert!(html.contains("<div>#comment</div>"));
}
