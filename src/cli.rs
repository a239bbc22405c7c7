// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// There is a single subcommand:
//
//   sitemapper crawl --domain example.com
//
// which crawls http://example.com/ and prints the sitemap.
// =============================================================================

use clap::{Parser, Subcommand};
use sitemapper::config::{
    CrawlConfig, DEFAULT_MAX_CONCURRENCY, DEFAULT_MAX_PAGES, DEFAULT_TIMEOUT_SECS,
};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "sitemapper",
    version,
    about = "A web crawler that maps the pages and static assets of one domain",
    long_about = "sitemapper crawls every page reachable through links on a single domain and prints, \
                  for each page, the same-domain pages it links to and the scripts, stylesheets and \
                  images it references."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log debug output (skipped links, duplicate pages) to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl a domain
    ///
    /// Example: sitemapper crawl --domain example.com
    #[command(visible_alias = "c")]
    Crawl(CrawlArgs),
}

#[derive(clap::Args, Debug)]
pub struct CrawlArgs {
    /// DOMAIN to crawl; crawling starts at http://DOMAIN/
    #[arg(short, long, value_name = "DOMAIN")]
    pub domain: String,

    /// Output the sitemap as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Maximum number of pages fetched at the same time
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY, value_name = "NUM")]
    pub max_concurrency: usize,

    /// Stop claiming new pages after this many
    #[arg(long, default_value_t = DEFAULT_MAX_PAGES, value_name = "NUM")]
    pub max_pages: usize,

    /// Crawl without a page cap (may never finish on some sites)
    #[arg(long, conflicts_with = "max_pages")]
    pub unbounded: bool,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, value_name = "SECS")]
    pub timeout: u64,
}

impl CrawlArgs {
    /// The seed URL for the domain
    pub fn seed(&self) -> String {
        format!("http://{}/", self.domain)
    }

    pub fn to_config(&self) -> CrawlConfig {
        CrawlConfig {
            max_concurrency: self.max_concurrency,
            max_pages: if self.unbounded {
                None
            } else {
                Some(self.max_pages)
            },
            request_timeout: Duration::from_secs(self.timeout),
            ..CrawlConfig::default()
        }
    }
}
