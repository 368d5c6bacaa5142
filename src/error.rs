//! Error types for fetching, writing, and the crawl run as a whole.
//!
//! Only [`CrawlError`] ever reaches `main`. Fetch failures are absorbed by the
//! crawler (page skipped, or empty article details), and a field missing from
//! a page is not an error at all.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A page could not be retrieved.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },
}

impl FetchError {
    /// Build a [`FetchError`] from a reqwest failure, keeping the HTTP status
    /// when the server did answer.
    pub fn from_reqwest(url: &str, source: reqwest::Error) -> Self {
        match source.status() {
            Some(status) => FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            },
            None => FetchError::Transport {
                url: url.to_string(),
                source,
            },
        }
    }

    /// Whether another attempt could plausibly succeed.
    ///
    /// Network errors, rate limiting and server errors are transient; any
    /// other HTTP status is not.
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Transport { .. } => true,
            FetchError::Status { status, .. } => *status == 429 || (500..600).contains(status),
        }
    }
}

/// The tabular destination could not be written.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),
}

/// Run-level failure of a crawl.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("failed to save scraped rows: {0}")]
    Sink(#[from] SinkError),
}
