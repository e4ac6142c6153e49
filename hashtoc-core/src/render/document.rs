//! Page template
//!
//! The head and style block are compiled in. The only input-dependent parts of the page are the two
//! section labels and the two fragments.

const DOCUMENT_CSS: &str = include_str!("../../assets/document.css");

/// Captions placed above the table of contents and above the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionLabels {
    pub contents: String,
    pub text: String,
}

impl Default for SectionLabels {
    fn default() -> Self {
        SectionLabels {
            contents: "Содержание:".to_string(),
            text: "Текст:".to_string(),
        }
    }
}

/// Wrap the rendered fragments in the full HTML page.
pub fn assemble_document(toc: &str, body: &str, labels: &SectionLabels) -> String {
    format!(
        r#"<!DOCTYPE html><html lang="en"><head>
    <meta charset="UTF-8">
    <title>Title</title>
    <link rel="preconnect" href="https://fonts.googleapis.com">
    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
    <link href="https://fonts.googleapis.com/css2?family=Roboto:wght@400;700&display=swap" rel="stylesheet">
    <style>
{css}    </style>
</head>
<body>
<h1>{contents}</h1>
{toc}
<h1>{text}</h1>
{body}</body></html>"#,
        css = DOCUMENT_CSS,
        contents = labels.contents,
        toc = toc,
        text = labels.text,
        body = body,
    )
}
