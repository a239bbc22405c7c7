// src/error.rs
// =============================================================================
// Error types for the crawler library.
//
// Only two things can go wrong in a way a caller sees:
// - the seed URL (or the configuration) is rejected before any network work
// - a single page fetch fails
//
// Fetch errors never reach the caller of `crawl`: the traversal logs them
// and leaves the page out of the sitemap. They are still a typed error so
// custom Fetcher implementations can report failures.
// =============================================================================

use thiserror::Error;

/// Errors returned synchronously by `crawl`, before any page is fetched.
#[derive(Error, Debug)]
pub enum CrawlError {
    /// The seed URL has no host (e.g. "/test/users")
    #[error("crawler: host missing from URL '{0}'")]
    MissingHost(String),

    /// The seed URL has no path (e.g. "http://test.com")
    #[error("crawler: path missing from URL '{0}'")]
    MissingPath(String),

    /// The seed could not be parsed at all
    #[error("crawler: invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// A CrawlConfig value is out of range
    #[error("crawler: invalid configuration: {0}")]
    Config(String),

    /// The HTTP client could not be constructed
    #[error("crawler: failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Failure to retrieve the content of one page.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection, DNS, TLS or timeout failure
    #[error("request to {url} failed: {reason}")]
    Request { url: String, reason: String },

    /// The response arrived but the body could not be read or decoded
    #[error("could not read body of {url}: {reason}")]
    Body { url: String, reason: String },
}
