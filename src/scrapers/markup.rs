//! Structural signatures of BBC News markup.
//!
//! Every element the crawler looks for is matched by one of the selectors
//! below (tag plus attribute), never by layout or class names. When the site
//! markup drifts, this is the only file that needs to change.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Node, Selector};

/// Article card on an index page.
pub const CARD_SELECTOR: &str = r#"div[data-testid="edinburgh-card"]"#;
/// Headline inside a card. Cards without one are skipped.
pub const TITLE_SELECTOR: &str = "h2";
/// Teaser paragraph inside a card.
pub const SUMMARY_SELECTOR: &str = "p";
/// Time marker inside a card; its `datetime` attribute is the publication date.
pub const TIME_SELECTOR: &str = "time";
pub const DATETIME_ATTR: &str = "datetime";

/// Main-content landmark of an article page.
pub const MAIN_SELECTOR: &str = r#"main[role="main"]"#;
pub const BYLINE_SELECTOR: &str = r#"div[data-testid="byline"]"#;
pub const BREADCRUMB_SELECTOR: &str = r#"a[data-testid="BreadcrumbItem"]"#;
pub const TIMESTAMP_SELECTOR: &str = r#"div[data-testid="timestamp"]"#;

/// Subtrees of the main region that never count as article text.
pub const EXCLUDED_TAGS: [&str; 5] = ["script", "style", "aside", "nav", "footer"];

pub static CARD: Lazy<Selector> = Lazy::new(|| compile(CARD_SELECTOR));
pub static TITLE: Lazy<Selector> = Lazy::new(|| compile(TITLE_SELECTOR));
pub static SUMMARY: Lazy<Selector> = Lazy::new(|| compile(SUMMARY_SELECTOR));
pub static TIME: Lazy<Selector> = Lazy::new(|| compile(TIME_SELECTOR));
pub static MAIN: Lazy<Selector> = Lazy::new(|| compile(MAIN_SELECTOR));
pub static BYLINE: Lazy<Selector> = Lazy::new(|| compile(BYLINE_SELECTOR));
pub static BREADCRUMB: Lazy<Selector> = Lazy::new(|| compile(BREADCRUMB_SELECTOR));
pub static TIMESTAMP: Lazy<Selector> = Lazy::new(|| compile(TIMESTAMP_SELECTOR));

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

fn compile(selector: &str) -> Selector {
    Selector::parse(selector).unwrap()
}

/// Collapse every whitespace run to a single space and trim the ends.
pub fn squish(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Text of `element` and all its descendants, whitespace-normalised.
pub fn element_text(element: ElementRef<'_>) -> String {
    squish(&element.text().collect::<String>())
}

/// Text of the first match of `selector` under `scope`, or empty.
pub fn first_text(scope: ElementRef<'_>, selector: &Selector) -> String {
    scope
        .select(selector)
        .next()
        .map(element_text)
        .unwrap_or_default()
}

/// Text of `region`, leaving out [`EXCLUDED_TAGS`] subtrees.
///
/// The tree is only read, so the parsed document stays intact for the other
/// lookups on the same page.
pub fn visible_text(region: ElementRef<'_>) -> String {
    let mut parts = Vec::new();
    collect_visible(region, &mut parts);
    squish(&parts.concat())
}

fn collect_visible<'a>(element: ElementRef<'a>, parts: &mut Vec<&'a str>) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => parts.push(text),
            Node::Element(el) if EXCLUDED_TAGS.contains(&el.name()) => {}
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    collect_visible(child, parts);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_all_signatures_compile() {
        for selector in [
            &CARD, &TITLE, &SUMMARY, &TIME, &MAIN, &BYLINE, &BREADCRUMB, &TIMESTAMP,
        ] {
            Lazy::force(selector);
        }
    }

    #[test]
    fn test_squish_collapses_runs() {
        assert_eq!(squish("  a \n\t b   c  "), "a b c");
        assert_eq!(squish(" \n "), "");
    }

    #[test]
    fn test_visible_text_skips_excluded_subtrees() {
        let doc = Html::parse_document(
            r#"<main role="main">
                 <h1>Headline</h1>
                 <script>var x = 1;</script>
                 <style>p { color: red }</style>
                 <nav><a href="/">Home</a></nav>
                 <p>First   paragraph.</p>
                 <aside>Related stories</aside>
                 <div><p>Nested <b>bold</b> text.</p></div>
                 <footer>Copyright</footer>
               </main>"#,
        );
        let main = doc.select(&MAIN).next().unwrap();

        assert_eq!(
            visible_text(main),
            "Headline First paragraph. Nested bold text."
        );
        // the shared tree is left untouched
        assert!(element_text(main).contains("Related stories"));
    }

    #[test]
    fn test_inline_elements_add_no_spaces() {
        let doc = Html::parse_document(
            r#"<main role="main"><p>The report, said <a href="/p">Smith</a>, was late. Don<span>'t</span> panic.</p></main>
               <h2>BBC<sup>2</sup> launches <em>Verify</em>.</h2>"#,
        );
        let main = doc.select(&MAIN).next().unwrap();
        let heading = doc.select(&TITLE).next().unwrap();

        assert_eq!(
            visible_text(main),
            "The report, said Smith, was late. Don't panic."
        );
        assert_eq!(element_text(heading), "BBC2 launches Verify.");
    }

    #[test]
    fn test_first_text_defaults_to_empty() {
        let doc = Html::parse_document("<div><span>x</span></div>");
        assert_eq!(first_text(doc.root_element(), &BYLINE), "");
    }
}
