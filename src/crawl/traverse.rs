// src/crawl/traverse.rs
// =============================================================================
// The concurrent traversal engine.
//
// How one branch works:
// 1. Claim the URL's request target in the shared VisitedSet.
//    Lost the race (or hit the page cap)? Return no pages.
// 2. Fetch the page. On failure, log it and return no pages.
// 3. Scan the body for links and assets; that is this branch's Page.
// 4. Spawn one child branch per link (fan-out).
// 5. Wait for every child and append their pages in the order they
//    finish (fan-in).
// 6. Return [own page, ...children's pages] to the parent.
//
// Every branch always returns a Vec (maybe empty), so a parent can never
// be left waiting on a child that silently gave up. A child that panics
// is logged and counts as empty.
//
// Concurrency:
// - Each link gets its own tokio task, at every level of the tree
// - A Semaphore caps how many fetches are in flight at once. The permit is
//   held only for the fetch itself, never while a branch waits on its
//   children, otherwise parents holding permits could starve their own
//   children
// - The VisitedSet is the only shared mutable state
// =============================================================================

use super::fetch::{Fetcher, HttpFetcher};
use super::visited::VisitedSet;
use crate::config::CrawlConfig;
use crate::error::CrawlError;
use crate::scanner::{request_target, same_host, scan};
use crate::sitemap::{Page, Sitemap};
use futures::future::{BoxFuture, FutureExt};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};
use url::Url;

/// Crawls sites with a configurable fetcher.
///
/// A Crawler holds no per-crawl state; every call to `crawl` gets its own
/// visited set and concurrency limit, so one Crawler can run several
/// crawls at the same time.
#[derive(Clone)]
pub struct Crawler {
    fetcher: Arc<dyn Fetcher>,
    config: CrawlConfig,
}

/// State shared by all branches of a single crawl
struct Traversal {
    fetcher: Arc<dyn Fetcher>,
    visited: VisitedSet,
    fetch_slots: Semaphore,
}

impl Crawler {
    /// A crawler that fetches over HTTP
    pub fn new(config: CrawlConfig) -> Result<Self, CrawlError> {
        config.validate()?;
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self {
            fetcher: Arc::new(fetcher),
            config,
        })
    }

    /// A crawler that uses a custom fetcher
    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>, config: CrawlConfig) -> Result<Self, CrawlError> {
        config.validate()?;
        Ok(Self { fetcher, config })
    }

    pub fn config(&self) -> &CrawlConfig {
        &self.config
    }

    /// Crawls every same-host page reachable from `seed`.
    ///
    /// Fails only when the seed has no host or no path, in which case
    /// nothing is fetched. Once crawling starts it always succeeds; pages
    /// that could not be fetched are simply absent from the sitemap.
    pub async fn crawl(&self, seed: &Url) -> Result<Sitemap, CrawlError> {
        validate_seed(seed)?;

        let traversal = Arc::new(Traversal {
            fetcher: Arc::clone(&self.fetcher),
            visited: VisitedSet::with_capacity_limit(self.config.max_pages),
            fetch_slots: Semaphore::new(self.config.max_concurrency),
        });

        let pages = crawl_branch(Arc::clone(&traversal), seed.clone()).await;

        info!(
            url = %seed,
            pages = pages.len(),
            claimed = traversal.visited.len(),
            "Finished crawling"
        );

        Ok(Sitemap {
            url: seed.to_string(),
            pages,
        })
    }
}

/// Rebuilds a same-host URL from a request target found on `parent`.
///
/// The target replaces only the path and query, so a target such as
/// "//other.test/x" stays a path on the parent's host instead of being
/// read as a scheme-relative URL the way `Url::join` would.
fn child_url(parent: &Url, target: &str) -> Url {
    let (path, query) = match target.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (target, None),
    };
    let mut child = parent.clone();
    child.set_path(path);
    child.set_query(query);
    child.set_fragment(None);
    child
}

/// Rejects seeds the traversal cannot start from
fn validate_seed(seed: &Url) -> Result<(), CrawlError> {
    if seed.host_str().map_or(true, str::is_empty) {
        return Err(CrawlError::MissingHost(seed.to_string()));
    }
    if seed.path().is_empty() {
        return Err(CrawlError::MissingPath(seed.to_string()));
    }
    Ok(())
}

// Recursive async fns need an explicit boxed future: the future type of a
// branch would otherwise contain itself
fn crawl_branch(traversal: Arc<Traversal>, url: Url) -> BoxFuture<'static, Vec<Page>> {
    async move {
        let target = request_target(&url);
        if !traversal.visited.try_claim(&target) {
            debug!(target = %target, "already claimed, skipping");
            return Vec::new();
        }

        info!(url = %url, "Crawling URL");

        let body = {
            // The semaphore is never closed, so acquire cannot fail
            let _permit = traversal.fetch_slots.acquire().await.ok();
            traversal.fetcher.fetch(&url).await
        };
        let body = match body {
            Ok(body) => body,
            Err(e) => {
                warn!(url = %url, error = %e, "Error fetching page");
                return Vec::new();
            }
        };

        let scanned = scan(&body, &url);
        let mut pages = vec![Page {
            path: url.path().to_string(),
            links: scanned.links,
            assets: scanned.assets,
        }];

        // Fan out: one task per link
        let mut children = JoinSet::new();
        for link in &pages[0].links {
            let child = child_url(&url, link);
            if !same_host(&child, &url) {
                debug!(link = %link, child = %child, "child link leaves the host, skipping");
                continue;
            }
            children.spawn(crawl_branch(Arc::clone(&traversal), child));
        }

        // Fan in, in completion order
        while let Some(joined) = children.join_next().await {
            match joined {
                Ok(child_pages) => pages.extend(child_pages),
                Err(e) => warn!(url = %url, error = %e, "child crawl task failed"),
            }
        }

        pages
    }
    .boxed()
}

/// Parses a seed URL string, rejecting seeds without a host or a path.
///
/// This is stricter than `Url::parse`, which quietly turns
/// "http://example.com" into "http://example.com/". A seed has to name
/// the page to start from explicitly.
pub fn parse_seed(raw: &str) -> Result<Url, CrawlError> {
    let url = Url::parse(raw).map_err(|e| match e {
        url::ParseError::RelativeUrlWithoutBase | url::ParseError::EmptyHost => {
            CrawlError::MissingHost(raw.to_string())
        }
        other => CrawlError::InvalidUrl {
            url: raw.to_string(),
            reason: other.to_string(),
        },
    })?;

    if url.host_str().map_or(true, str::is_empty) {
        return Err(CrawlError::MissingHost(raw.to_string()));
    }

    // Look at the text after "scheme://authority" for an explicit path
    let after_scheme = raw.split_once("://").map_or(raw, |(_, rest)| rest);
    let authority_end = after_scheme
        .find(['/', '?', '#'])
        .unwrap_or(after_scheme.len());
    if !after_scheme[authority_end..].starts_with('/') {
        return Err(CrawlError::MissingPath(raw.to_string()));
    }

    Ok(url)
}

/// Crawls `seed` over HTTP with the default configuration.
pub async fn crawl(seed: &Url) -> Result<Sitemap, CrawlError> {
    Crawler::new(CrawlConfig::default())?.crawl(seed).await
}
