// src/config.rs
// =============================================================================
// Runtime configuration for one crawl.
//
// The defaults keep finite sites behaving exactly as an unbounded crawl
// would, while putting a ceiling on two things that could otherwise grow
// without limit:
// - simultaneous in-flight fetches (max_concurrency)
// - distinct pages claimed (max_pages), which stops servers that generate
//   endless distinct query strings
// =============================================================================

use crate::error::CrawlError;
use std::time::Duration;
use tokio::sync::Semaphore;

/// Default number of fetches allowed in flight at once
pub const DEFAULT_MAX_CONCURRENCY: usize = 16;

/// Default cap on distinct pages claimed in one crawl
pub const DEFAULT_MAX_PAGES: usize = 10_000;

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Tunables for a single crawl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlConfig {
    /// Maximum number of page fetches running at the same time
    pub max_concurrency: usize,
    /// Maximum number of distinct pages to claim; None means no cap
    pub max_pages: Option<usize>,
    /// Timeout applied to every HTTP request
    pub request_timeout: Duration,
    /// User-Agent header sent by the HTTP fetcher
    pub user_agent: String,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            max_pages: Some(DEFAULT_MAX_PAGES),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("sitemapper/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl CrawlConfig {
    /// Checks that every value is usable.
    ///
    /// A zero concurrency limit would block every fetch forever, and a zero
    /// page cap would refuse even the seed page.
    pub fn validate(&self) -> Result<(), CrawlError> {
        if self.max_concurrency == 0 {
            return Err(CrawlError::Config(
                "max_concurrency must be at least 1".to_string(),
            ));
        }
        if self.max_concurrency > Semaphore::MAX_PERMITS {
            return Err(CrawlError::Config(format!(
                "max_concurrency must be at most {}",
                Semaphore::MAX_PERMITS
            )));
        }
        if self.max_pages == Some(0) {
            return Err(CrawlError::Config(
                "max_pages must be at least 1 (omit it for no cap)".to_string(),
            ));
        }
        if self.request_timeout.is_zero() {
            return Err(CrawlError::Config(
                "request_timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
