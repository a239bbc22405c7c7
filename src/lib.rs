// src/lib.rs
// =============================================================================
// sitemapper crawls one web domain from a seed URL and produces a sitemap:
// for every same-host page reachable through anchor links, the page's
// outbound same-host links and the static assets (scripts, stylesheets,
// images) it references.
//
// Layout:
// - crawl:   the concurrent traversal engine, visited set and page fetcher
// - scanner: extracts links and assets from HTML
// - sitemap: the Sitemap / Page data model and its text rendering
// - config:  tunables for one crawl (concurrency, page cap, timeout)
// - error:   library error types
// =============================================================================

pub mod config;
pub mod crawl;
pub mod error;
pub mod scanner;
pub mod sitemap;

pub use config::CrawlConfig;
pub use crawl::{crawl, parse_seed, Crawler, Fetcher, HttpFetcher};
pub use error::{CrawlError, FetchError};
pub use sitemap::{Page, Sitemap};
