// src/sitemap.rs
// =============================================================================
// The crawl result and its text rendering.
//
// A Sitemap is the flattened list of every Page the crawl produced, in the
// order pages finished crawling. Each Page already carries its links and
// assets sorted and deduplicated (the scanner guarantees that), so rendering
// is pure formatting and never re-sorts.
//
// Rendered form:
//
//   Site map for http://example.com/
//   Path:
//   	/
//   	Links:
//   		/about
//   	Assets:
//   		/site.css
//
// Note the trailing space after "Path:" and the tab indentation.
//
// Pages are keyed by path + query while crawling, but only the path is
// rendered. "/bar?x=1" and "/bar?x=2" are two pages, so "/bar" can show
// up in more than one Path block.
// =============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every page discovered during one crawl.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sitemap {
    /// The seed URL the crawl started from
    pub url: String,
    /// Pages in completion order
    pub pages: Vec<Page>,
}

/// One crawled page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Path component of the crawled URL (no query string)
    pub path: String,
    /// Same-host link identifiers, sorted and unique
    pub links: Vec<String>,
    /// Asset references exactly as written in the markup, sorted and unique
    pub assets: Vec<String>,
}

impl Sitemap {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            pages: Vec::new(),
        }
    }

    /// Number of pages in the sitemap
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// First page whose path matches, if any
    pub fn page(&self, path: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.path == path)
    }
}

impl fmt::Display for Sitemap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Site map for {}", self.url)?;
        for page in &self.pages {
            write!(f, "{}", page)?;
        }
        Ok(())
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path: \n\t{}\n\tLinks:\n", self.path)?;
        for link in &self.links {
            writeln!(f, "\t\t{}", link)?;
        }
        writeln!(f, "\tAssets:")?;
        for asset in &self.assets {
            writeln!(f, "\t\t{}", asset)?;
        }
        Ok(())
    }
}
