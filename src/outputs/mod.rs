//! Output generation for scraped rows.
//!
//! The crawler hands its finished rows to a [`TabularSink`] exactly once.
//!
//! # Submodules
//!
//! - [`csv_file`]: writes rows to a UTF-8 CSV file readable by spreadsheet tools
//!
//! # Output Structure
//!
//! ```text
//! bbc_news_internacional.csv
//! title,link,summary,publication_date,content,author,category,reading_time_label
//! Storm hits coast,https://www.bbc.com/news/articles/...,...
//! ```

use crate::error::SinkError;
use crate::models::NewsRow;

pub mod csv_file;

/// Destination for the rows of a crawl run.
pub trait TabularSink {
    /// Write `rows` in order, one record per row.
    fn write_rows(&mut self, rows: &[NewsRow]) -> Result<(), SinkError>;
}
