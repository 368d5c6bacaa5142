//! Crawl tuning: where the index lives and how politely it is fetched.
//!
//! The command line only selects the page count and the output file. Every
//! other knob lives in [`CrawlConfig`], whose [`Default`] targets the BBC News
//! international index.

use std::time::Duration;

/// Desktop Chrome User-Agent sent with every request.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Settings for one crawl run.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Site root that relative article links are resolved against.
    pub base_url: String,
    /// Path of the first index page, relative to `base_url`.
    pub index_path: String,
    /// Query parameter carrying the page number for pages after the first.
    pub page_param: String,
    pub user_agent: String,
    /// Pause between consecutive index page fetches.
    pub page_delay: Duration,
    pub request_timeout: Duration,
    /// Extra attempts for a transient fetch failure. Zero disables retrying.
    pub max_retries: usize,
    /// First backoff step; doubles with each further attempt.
    pub retry_base_delay: Duration,
    /// Upper bound of the random jitter added to each backoff pause.
    pub retry_jitter: Duration,
    /// Article pages fetched at once per index page. One means sequential.
    pub detail_concurrency: usize,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.bbc.com".to_string(),
            index_path: "news".to_string(),
            page_param: "page".to_string(),
            user_agent: BROWSER_USER_AGENT.to_string(),
            page_delay: Duration::from_secs(3),
            request_timeout: Duration::from_secs(30),
            max_retries: 2,
            retry_base_delay: Duration::from_secs(1),
            retry_jitter: Duration::from_millis(250),
            detail_concurrency: 1,
        }
    }
}

impl CrawlConfig {
    /// URL of index page `page` (1-based).
    ///
    /// The first page is the bare index path; later pages add the page
    /// number as a query parameter.
    pub fn index_url(&self, page: u32) -> String {
        let index = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.index_path.trim_start_matches('/')
        );
        if page > 1 {
            format!("{}?{}={}", index, self.page_param, page)
        } else {
            index
        }
    }
}
