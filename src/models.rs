//! Data models for scraped news articles.
//!
//! This module defines the records that flow through the crawl pipeline:
//! - [`ListItem`]: fields read from a card on an index page
//! - [`ArticleDetails`]: fields read from the article page itself
//! - [`NewsRow`]: the merged record written to the CSV output
//!
//! Every field is a plain `String`. An empty string is the only way a
//! missing value is represented, so every row always carries all eight
//! columns.

use serde::{Deserialize, Serialize};

/// List-level fields of a single index card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListItem {
    /// Headline text of the card.
    pub title: String,
    /// Absolute article URL, or empty when the heading has no enclosing link.
    pub link: String,
    /// Teaser paragraph shown under the headline.
    pub summary: String,
    /// Machine-readable `datetime` attribute of the card's time marker.
    pub publication_date: String,
}

/// Fields extracted from an individual article page.
///
/// [`ArticleDetails::default`] is the all-empty result returned whenever the
/// article could not be fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleDetails {
    /// Body text of the main region, whitespace collapsed.
    pub content: String,
    /// Byline text.
    pub author: String,
    /// Label of the first breadcrumb item.
    pub category: String,
    /// Raw text of the timestamp region. This is not a parsed duration.
    pub reading_time_label: String,
}

/// One article's merged record, in output column order.
///
/// Field order must match [`NewsRow::COLUMNS`]: records are serialized
/// positionally under that header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsRow {
    pub title: String,
    pub link: String,
    pub summary: String,
    pub publication_date: String,
    pub content: String,
    pub author: String,
    pub category: String,
    pub reading_time_label: String,
}

impl NewsRow {
    /// Column names, in the order they are written.
    pub const COLUMNS: [&'static str; 8] = [
        "title",
        "link",
        "summary",
        "publication_date",
        "content",
        "author",
        "category",
        "reading_time_label",
    ];

    /// Merge the list-level and detail-level halves of an article.
    pub fn from_parts(item: ListItem, details: ArticleDetails) -> Self {
        Self {
            title: item.title,
            link: item.link,
            summary: item.summary,
            publication_date: item.publication_date,
            content: details.content,
            author: details.author,
            category: details.category,
            reading_time_label: details.reading_time_label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_keeps_every_field() {
        let item = ListItem {
            title: "Storm hits coast".into(),
            link: "https://www.bbc.com/news/articles/storm".into(),
            summary: "Winds up to 100mph".into(),
            publication_date: "2025-05-06T10:00:00.000Z".into(),
        };
        let details = ArticleDetails {
            content: "Body".into(),
            author: "By Jane Doe".into(),
            category: "UK".into(),
            reading_time_label: "2 hours ago".into(),
        };

        let row = NewsRow::from_parts(item, details);
        assert_eq!(row.title, "Storm hits coast");
        assert_eq!(row.link, "https://www.bbc.com/news/articles/storm");
        assert_eq!(row.summary, "Winds up to 100mph");
        assert_eq!(row.publication_date, "2025-05-06T10:00:00.000Z");
        assert_eq!(row.content, "Body");
        assert_eq!(row.author, "By Jane Doe");
        assert_eq!(row.category, "UK");
        assert_eq!(row.reading_time_label, "2 hours ago");
    }

    #[test]
    fn test_default_details_are_empty_strings() {
        let row = NewsRow::from_parts(
            ListItem {
                title: "Only a title".into(),
                ..Default::default()
            },
            ArticleDetails::default(),
        );
        assert_eq!(
            row,
            NewsRow {
                title: "Only a title".into(),
                ..Default::default()
            }
        );
    }
}
