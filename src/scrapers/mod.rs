//! BBC News crawling and extraction.
//!
//! The pipeline follows a two-phase pattern:
//!
//! 1. **Indexing** ([`index`]): walk the paginated index and read each card's
//!    title, link, summary and date
//! 2. **Detail fetching** ([`detail`]): open every linked article and read its
//!    body, byline, category and timestamp label
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`markup`] | Named structural selectors and text helpers |
//! | [`detail`] | [`detail::DetailExtractor`], one article page at a time |
//! | [`index`] | [`index::IndexCrawler`], pagination, merging, hand-off to the sink |

use std::time::Duration;

pub mod detail;
pub mod index;
pub mod markup;

/// Throttle between index page requests.
pub trait Pacer {
    async fn pause(&self, delay: Duration);
}

/// [`Pacer`] that sleeps on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioPacer;

impl Pacer for TokioPacer {
    async fn pause(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}
