// src/scanner/html.rs
// =============================================================================
// The default tag stream, built on the `scraper` crate.
//
// scraper parses the whole document with html5ever (the same parser
// browsers use), so broken markup is recovered the way a browser would
// recover it. We walk every element in document order and hand out owned
// StartTags. Owned data matters: scraper's `Html` is not Send, and the
// crawler scans pages inside tokio tasks that can move between threads.
// =============================================================================

use super::{StartTag, TagTokens};
use scraper::{Html, Selector};
use std::sync::LazyLock;

// Only the four tag kinds the scanner reads; everything else is skipped
// at parse time
static SCANNED_TAGS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a, script, img, link").expect("Invalid tag selector"));

/// Start tags of an HTML document, in document order.
pub struct HtmlTokens {
    tags: std::vec::IntoIter<StartTag>,
}

impl HtmlTokens {
    pub fn new(html: &str) -> Self {
        let document = Html::parse_document(html);

        let tags: Vec<StartTag> = document
            .select(&SCANNED_TAGS)
            .map(|element| {
                let value = element.value();
                let attrs = value
                    .attrs()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect();
                StartTag::new(value.name(), attrs)
            })
            .collect();

        Self {
            tags: tags.into_iter(),
        }
    }
}

impl TagTokens for HtmlTokens {
    fn next_tag(&mut self) -> Option<StartTag> {
        self.tags.next()
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why collect into a Vec first?
//    - `document.select()` borrows the document
//    - Returning an iterator that borrows a local would not compile
//    - Collecting up front lets HtmlTokens own everything it hands out
//
// 2. Tag and attribute names
//    - html5ever lowercases them, so "<A HREF=...>" shows up as "a"/"href"
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(mut tokens: HtmlTokens) -> Vec<StartTag> {
        let mut out = Vec::new();
        while let Some(tag) = tokens.next_tag() {
            out.push(tag);
        }
        out
    }

    #[test]
    fn test_tags_in_document_order() {
        let html = r#"
            <html><head><link rel="stylesheet" href="a.css"><script src="b.js"></script></head>
            <body><p>text</p><a href="/c">c</a><img src="d.png"></body></html>
        "#;
        let tags = drain(HtmlTokens::new(html));
        let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["link", "script", "a", "img"]);
        assert_eq!(tags[0].attr("rel"), Some("stylesheet"));
        assert_eq!(tags[0].attr("href"), Some("a.css"));
    }

    #[test]
    fn test_uppercase_markup_normalized() {
        let tags = drain(HtmlTokens::new(r#"<A HREF="/x">x</A>"#));
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "a");
        assert_eq!(tags[0].attr("href"), Some("/x"));
    }

    #[test]
    fn test_malformed_markup() {
        // nothing is ever closed
        let tags = drain(HtmlTokens::new(r#"<div><a href="/ok">ok<p><img src="i.png">"#));
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].attr("href"), Some("/ok"));
        assert_eq!(tags[1].attr("src"), Some("i.png"));
    }
}
