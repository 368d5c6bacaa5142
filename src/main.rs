//! # BBC News Scraper
//!
//! Crawls the paginated BBC News international index, follows every article
//! card to its page, and saves the merged fields as a CSV file.
//!
//! ## Usage
//!
//! ```sh
//! bbc_news_scraper --max-pages 2 --output bbc_news_internacional.csv
//! ```
//!
//! ## Architecture
//!
//! The application follows a pipeline architecture:
//! 1. **Indexing**: Walk `news`, `news?page=2`, ... until the page limit or an
//!    index page without cards
//! 2. **Fetching**: Open each card's article and extract body, byline,
//!    category and timestamp label
//! 3. **Output**: Write one CSV row per card that had a headline
//!
//! Requests are sequential, retried with backoff on transient failures, and
//! index pages are spaced three seconds apart.

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod error;
mod fetch;
mod models;
mod outputs;
mod scrapers;
mod utils;

#[cfg(test)]
mod testing;

use cli::Cli;
use config::CrawlConfig;
use fetch::{HttpFetcher, RetryFetch};
use outputs::csv_file::CsvFileSink;
use scrapers::index::IndexCrawler;
use utils::ensure_writable_parent;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("bbc_news_scraper starting up");

    let args = Cli::parse();
    debug!(max_pages = args.max_pages, output = %args.output.display(), "Parsed CLI arguments");

    // Early check: the crawl takes a while, fail fast on a bad destination
    if let Err(e) = ensure_writable_parent(&args.output).await {
        error!(
            path = %args.output.display(),
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    let config = CrawlConfig::default();
    let http = HttpFetcher::new(&config)?;
    let fetcher = RetryFetch::new(http, config.max_retries, config.retry_base_delay)
        .with_max_jitter(config.retry_jitter);
    let crawler = IndexCrawler::new(fetcher, config);

    let mut sink = CsvFileSink::new(&args.output);
    let written = match crawler.run(args.max_pages, &mut sink).await {
        Ok(written) => written,
        Err(e) => {
            error!(path = %sink.path().display(), error = %e, "Failed to save scraped news");
            return Err(e.into());
        }
    };

    if written > 0 {
        info!(path = %sink.path().display(), count = written, "Data saved successfully");
    } else {
        info!("No data was collected");
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
