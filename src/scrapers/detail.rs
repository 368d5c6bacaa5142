//! Article page extraction.
//!
//! [`DetailExtractor`] turns one article URL into [`ArticleDetails`]. It never
//! fails: an unreachable page is logged and yields the all-empty result, and
//! every field missing from the markup is simply left empty.

use super::markup::{self, BREADCRUMB, BYLINE, MAIN, TIMESTAMP};
use crate::fetch::Fetch;
use crate::models::ArticleDetails;
use scraper::Html;
use tracing::{debug, instrument, warn};

/// Fetches article pages and pulls out their detail fields.
#[derive(Debug)]
pub struct DetailExtractor<'a, F> {
    fetcher: &'a F,
}

impl<'a, F> DetailExtractor<'a, F>
where
    F: Fetch,
{
    pub fn new(fetcher: &'a F) -> Self {
        Self { fetcher }
    }

    /// Fetch `url` and extract its detail fields.
    ///
    /// Fetch failures degrade to [`ArticleDetails::default`].
    #[instrument(level = "debug", skip(self))]
    pub async fn extract(&self, url: &str) -> ArticleDetails {
        match self.fetcher.fetch(url).await {
            Ok(body) => {
                let details = parse_details(&body);
                debug!(content_bytes = details.content.len(), "Parsed article page");
                details
            }
            Err(e) => {
                warn!(%url, error = %e, "Failed to fetch article details");
                ArticleDetails::default()
            }
        }
    }
}

/// Extract the detail fields from an article page's HTML.
pub fn parse_details(html: &str) -> ArticleDetails {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let content = document
        .select(&MAIN)
        .next()
        .map(markup::visible_text)
        .unwrap_or_default();

    ArticleDetails {
        content,
        author: markup::first_text(root, &BYLINE),
        category: markup::first_text(root, &BREADCRUMB),
        reading_time_label: markup::first_text(root, &TIMESTAMP),
    }
}
