//! Paginated index crawling.
//!
//! [`IndexCrawler`] walks `news`, `news?page=2`, ... up to the requested page
//! count. Each card with a headline becomes one [`NewsRow`]: the list-level
//! fields come from the card, the rest from the linked article via
//! [`DetailExtractor`].
//!
//! # Termination
//!
//! - A page that cannot be fetched is logged and skipped.
//! - A page without any card ends pagination.
//! - Index requests are spaced by the configured page delay; no pause
//!   follows the last page attempted.

use super::detail::DetailExtractor;
use super::markup::{self, CARD, DATETIME_ATTR, SUMMARY, TIME, TITLE};
use super::{Pacer, TokioPacer};
use crate::config::CrawlConfig;
use crate::error::CrawlError;
use crate::fetch::Fetch;
use crate::models::{ArticleDetails, ListItem, NewsRow};
use crate::outputs::TabularSink;
use crate::utils::truncate_for_log;
use futures::stream::{self, StreamExt};
use scraper::{ElementRef, Html};
use tracing::{debug, error, info, instrument, warn};
use url::Url;

/// Cards found on one index page.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct IndexPage {
    /// Number of card containers, including those skipped for lack of a title.
    pub cards: usize,
    /// Cards that had a title, in document order.
    pub items: Vec<ListItem>,
}

impl IndexPage {
    /// An index page without cards marks the end of pagination.
    pub fn is_empty(&self) -> bool {
        self.cards == 0
    }
}

/// Read every card of an index page.
///
/// Links are resolved against `base_url`.
pub fn parse_index(html: &str, base_url: &str) -> IndexPage {
    let base = match Url::parse(base_url) {
        Ok(base) => Some(base),
        Err(e) => {
            warn!(%base_url, error = %e, "Invalid base URL; card links will be left empty");
            None
        }
    };
    let document = Html::parse_document(html);

    let mut page = IndexPage::default();
    for card in document.select(&CARD) {
        page.cards += 1;
        let Some(heading) = card.select(&TITLE).next() else {
            continue;
        };

        page.items.push(ListItem {
            title: markup::element_text(heading),
            link: resolve_link(heading, base.as_ref()),
            summary: markup::first_text(card, &SUMMARY),
            publication_date: card
                .select(&TIME)
                .next()
                .and_then(|time| time.value().attr(DATETIME_ATTR))
                .map(str::to_string)
                .unwrap_or_default(),
        });
    }
    page
}

/// `href` of the nearest `<a>` enclosing `heading`, made absolute.
fn resolve_link(heading: ElementRef<'_>, base: Option<&Url>) -> String {
    heading
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "a")
        .and_then(|anchor| anchor.value().attr("href"))
        .and_then(|href| base?.join(href).ok())
        .map(|url| url.to_string())
        .unwrap_or_default()
}

/// Crawls the paginated index and merges each card with its article page.
#[derive(Debug)]
pub struct IndexCrawler<F, P = TokioPacer> {
    fetcher: F,
    pacer: P,
    config: CrawlConfig,
}

impl<F> IndexCrawler<F, TokioPacer>
where
    F: Fetch,
{
    pub fn new(fetcher: F, config: CrawlConfig) -> Self {
        Self {
            fetcher,
            pacer: TokioPacer,
            config,
        }
    }
}

impl<F, P> IndexCrawler<F, P>
where
    F: Fetch,
    P: Pacer,
{
    /// Replace the throttle used between index pages.
    pub fn with_pacer<Q: Pacer>(self, pacer: Q) -> IndexCrawler<F, Q> {
        IndexCrawler {
            fetcher: self.fetcher,
            pacer,
            config: self.config,
        }
    }

    /// Crawl up to `max_pages` index pages and write the rows to `sink`.
    ///
    /// Returns the number of rows written. The sink is only called when at
    /// least one row was collected.
    #[instrument(level = "info", skip(self, sink))]
    pub async fn run<S: TabularSink>(&self, max_pages: u32, sink: &mut S) -> Result<usize, CrawlError> {
        let rows = self.collect(max_pages).await;
        if rows.is_empty() {
            warn!("No news was collected; nothing to save");
            return Ok(0);
        }

        sink.write_rows(&rows)?;
        info!(count = rows.len(), "Saved scraped news");
        Ok(rows.len())
    }

    /// Crawl up to `max_pages` index pages and return the merged rows in
    /// page order, then card order.
    pub async fn collect(&self, max_pages: u32) -> Vec<NewsRow> {
        let mut rows = Vec::new();

        for page in 1..=max_pages {
            if page > 1 {
                self.pacer.pause(self.config.page_delay).await;
            }

            let url = self.config.index_url(page);
            info!(page, %url, "Collecting index page");

            let body = match self.fetcher.fetch(&url).await {
                Ok(body) => body,
                Err(e) => {
                    error!(page, %url, error = %e, "Failed to process index page; skipping");
                    continue;
                }
            };

            let index = parse_index(&body, &self.config.base_url);
            if index.is_empty() {
                info!(page, "No news cards found on page; stopping");
                debug!(body = %truncate_for_log(&body, 300), "Empty index page");
                break;
            }

            let skipped = index.cards - index.items.len();
            let page_rows = self.merge_details(index.items).await;
            info!(page, rows = page_rows.len(), skipped, "Collected index page");
            rows.extend(page_rows);
        }

        info!(count = rows.len(), "Total news collected");
        rows
    }

    /// Fetch article details for `items`, keeping their order.
    async fn merge_details(&self, items: Vec<ListItem>) -> Vec<NewsRow> {
        let extractor = DetailExtractor::new(&self.fetcher);
        let extractor = &extractor;

        stream::iter(items)
            .map(|item| async move {
                let details = if item.link.is_empty() {
                    ArticleDetails::default()
                } else {
                    extractor.extract(&item.link).await
                };
                NewsRow::from_parts(item, details)
            })
            .buffered(self.config.detail_concurrency.max(1))
            .collect()
            .await
    }
}
