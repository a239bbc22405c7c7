// src/scanner/mod.rs
// =============================================================================
// This module extracts navigational links and static assets from a page.
//
// The scanner walks the markup as a stream of start tags and, for each tag
// it cares about, reads exactly one attribute:
//
//   tag      attribute   kind
//   <a>      href        link
//   <script> src         asset
//   <img>    src         asset
//   <link>   href        asset
//
// Links are resolved against the page URL and kept only when they stay on
// the same host and do not point back at the page itself. They are stored
// as request targets (path + query, no fragment), the same key the crawler
// dedups on. Assets are kept verbatim, whatever host they live on.
//
// Submodules:
// - html: the default tag stream, backed by the `scraper` crate
// =============================================================================

mod html;

pub use html::HtmlTokens;

use std::collections::BTreeSet;
use tracing::debug;
use url::Url;

/// A start tag together with its attributes, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTag {
    pub name: String,
    pub attrs: Vec<(String, String)>,
}

impl StartTag {
    pub fn new(name: impl Into<String>, attrs: Vec<(String, String)>) -> Self {
        Self {
            name: name.into(),
            attrs,
        }
    }

    /// Value of the first attribute named `key`
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// A pull-style source of start tags.
///
/// Anything that can hand out start tags one at a time can feed the
/// scanner; `None` means the input is exhausted (or the tokenizer gave up
/// on malformed markup, which is treated the same way).
pub trait TagTokens {
    fn next_tag(&mut self) -> Option<StartTag>;
}

/// The tag kinds the scanner recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagKind {
    Anchor,
    Script,
    Image,
    Stylesheet,
}

impl TagKind {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "a" => Some(TagKind::Anchor),
            "script" => Some(TagKind::Script),
            "img" => Some(TagKind::Image),
            "link" => Some(TagKind::Stylesheet),
            _ => None,
        }
    }

    /// The one attribute examined for this tag kind
    fn attribute(self) -> &'static str {
        match self {
            TagKind::Anchor | TagKind::Stylesheet => "href",
            TagKind::Script | TagKind::Image => "src",
        }
    }
}

/// What one page references: sorted, deduplicated links and assets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub links: Vec<String>,
    pub assets: Vec<String>,
}

/// Scans HTML content using `base` as the page's own URL.
pub fn scan(content: &str, base: &Url) -> ScanResult {
    scan_tokens(HtmlTokens::new(content), base)
}

/// Scans any tag stream using `base` as the page's own URL.
pub fn scan_tokens<T: TagTokens>(mut tokens: T, base: &Url) -> ScanResult {
    // BTreeSet gives us dedup and byte-wise ordering in one go
    let mut links = BTreeSet::new();
    let mut assets = BTreeSet::new();
    let own_target = request_target(base);

    while let Some(tag) = tokens.next_tag() {
        let Some(kind) = TagKind::from_name(&tag.name) else {
            continue;
        };
        let value = match tag.attr(kind.attribute()) {
            Some(v) if !v.is_empty() => v,
            _ => continue,
        };

        match kind {
            TagKind::Anchor => match base.join(value) {
                Ok(resolved) => {
                    if same_host(&resolved, base) {
                        let target = request_target(&resolved);
                        if target != own_target {
                            links.insert(target);
                        }
                    }
                }
                Err(e) => {
                    debug!(href = value, error = %e, "skipping unresolvable link");
                }
            },
            TagKind::Script | TagKind::Image | TagKind::Stylesheet => {
                assets.insert(value.to_string());
            }
        }
    }

    ScanResult {
        links: links.into_iter().collect(),
        assets: assets.into_iter().collect(),
    }
}

/// Canonical identifier of a URL: its path plus query string, no fragment.
///
/// "/bar?x=1#top" and "/bar?x=1" share an identifier; "/bar?x=1" and
/// "/bar?x=2" do not. A bare "?" is kept, so "/bar?" is distinct from "/bar".
pub fn request_target(url: &Url) -> String {
    let path = if url.path().is_empty() { "/" } else { url.path() };
    match url.query() {
        Some(query) => format!("{}?{}", path, query),
        None => path.to_string(),
    }
}

/// True when both URLs name the same host and explicit port.
///
/// The scheme is not compared: "https://site/x" is on the same host as
/// "http://site/", while "http://site:8080/x" is not.
pub fn same_host(url: &Url, base: &Url) -> bool {
    url.host_str() == base.host_str() && url.port() == base.port()
}
