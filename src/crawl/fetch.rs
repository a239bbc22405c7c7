// src/crawl/fetch.rs
// =============================================================================
// Retrieving the raw content of a page.
//
// The traversal only needs "give me the body for this URL", so that is all
// the Fetcher trait asks for. HttpFetcher is the real implementation; tests
// plug in an in-memory one.
//
// Status codes are deliberately not interpreted: a 404 page with a readable
// body is content like any other and gets scanned. Only transport failures
// (DNS, connect, timeout, unreadable body) are errors.
// =============================================================================

use crate::config::CrawlConfig;
use crate::error::{CrawlError, FetchError};
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// Anything that can turn a URL into page content.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError>;
}

/// Fetches pages over HTTP(S) with a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a client with the configured timeout and user agent
    pub fn new(config: &CrawlConfig) -> Result<Self, CrawlError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }

    /// Wraps an already configured client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Request {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        response.text().await.map_err(|e| FetchError::Body {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}
