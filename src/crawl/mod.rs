// src/crawl/mod.rs
// =============================================================================
// This module handles crawling a website.
//
// Features:
// - Recursive fan-out/fan-in crawl, one tokio task per discovered link
// - Same-host restriction (never follows links to other sites)
// - Race-free dedup of pages through a per-crawl visited set
// - Capped number of simultaneous fetches and of pages per crawl
//
// Submodules:
// - visited:  the atomic claim-once set of request targets
// - fetch:    the Fetcher trait and its reqwest implementation
// - traverse: the traversal engine and the public crawl entry points
// =============================================================================

mod fetch;
mod traverse;
mod visited;

pub use fetch::{Fetcher, HttpFetcher};
pub use traverse::{crawl, parse_seed, Crawler};
pub use visited::VisitedSet;
