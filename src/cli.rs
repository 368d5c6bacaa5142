//! Command-line interface definitions for the BBC News scraper.
//!
//! This module defines the CLI arguments and options using the `clap` crate.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the BBC News scraper.
///
/// # Examples
///
/// ```sh
/// # Scrape the first two index pages into bbc_news_internacional.csv
/// bbc_news_scraper
///
/// # Scrape five pages into a custom file
/// bbc_news_scraper -p 5 -o ./data/bbc.csv
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Maximum number of index pages to crawl
    #[arg(short = 'p', long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_pages: u32,

    /// Destination CSV file
    #[arg(short, long, default_value = "bbc_news_internacional.csv")]
    pub output: PathBuf,
}
