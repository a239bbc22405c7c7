// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr, so stdout only carries the sitemap)
// 3. Build the seed URL http://<domain>/ and crawl it
// 4. Print the sitemap as text or JSON
// 5. Exit with proper code (0 = success, 2 = error)
// =============================================================================

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, CrawlArgs};
use sitemapper::{parse_seed, Crawler, Sitemap};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Crawl(args) => handle_crawl(&args).await,
    }
}

// Handles the 'crawl' subcommand
async fn handle_crawl(args: &CrawlArgs) -> Result<i32> {
    let seed_text = args.seed();
    let seed = parse_seed(&seed_text)
        .with_context(|| format!("cannot crawl domain '{}'", args.domain))?;

    let crawler = Crawler::new(args.to_config())?;
    let sitemap = crawler.crawl(&seed).await?;

    print_sitemap(&sitemap, args.json)?;
    Ok(0)
}

fn print_sitemap(sitemap: &Sitemap, json: bool) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(sitemap)?;
        println!("{}", json_output);
    } else {
        println!("{}", sitemap);
    }
    Ok(())
}

// RUST_LOG wins when set; otherwise info (or debug with --verbose) for our
// own crate and warnings from everything else
fn setup_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("sitemapper=debug,warn")
        } else {
            EnvFilter::new("sitemapper=info,warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
