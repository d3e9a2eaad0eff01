//! Link extraction for the crawl frontier
//!
//! Only the leading `<a href>` elements of a page are considered, which keeps
//! the breadth-first crawl shallow and focused on primary navigation.

use scraper::{Html, Selector};
use url::Url;

/// Extracts crawlable link targets from a parsed page
///
/// # Link Extraction Rules
///
/// - Only the first `limit` `<a href="...">` elements are considered; an
///   element whose href is later rejected still uses up one slot
/// - Empty and fragment-only hrefs are rejected
/// - `javascript:`, `mailto:`, `tel:` and `data:` hrefs are rejected
/// - Relative hrefs are resolved against `base_url`
/// - Fragments are stripped, so `/a#x` and `/a` name the same target
/// - Targets that are not HTTP(S) after resolution are rejected
///
/// # Arguments
///
/// * `document` - The parsed page
/// * `base_url` - The URL the page was fetched from
/// * `limit` - Maximum number of anchors to inspect
///
/// # Returns
///
/// Absolute URLs in document order (duplicates preserved)
///
/// # Example
///
/// ```
/// use ai_compliance::crawler::extract_links;
/// use scraper::Html;
/// use url::Url;
///
/// let html = Html::parse_document(r#"<a href="/about">About</a><a href="mailto:x@y.z">Mail</a>"#);
/// let base = Url::parse("https://example.com/").unwrap();
/// let links = extract_links(&html, &base, 5);
/// assert_eq!(links.len(), 1);
/// assert_eq!(links[0].as_str(), "https://example.com/about");
/// ```
pub fn extract_links(document: &Html, base_url: &Url, limit: usize) -> Vec<Url> {
    let Ok(a_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&a_selector)
        .take(limit)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_link(href, base_url))
        .collect()
}

/// Resolves a link href to an absolute URL and validates it
///
/// Returns None if the link should be excluded:
/// - empty or fragment-only hrefs
/// - javascript:, mailto:, tel:, data: schemes
/// - Invalid URLs
/// - Non-HTTP(S) URLs after resolution
///
/// The fragment of an accepted URL is removed.
fn resolve_link(href: &str, base_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let lowered = href.to_ascii_lowercase();
    if lowered.starts_with("javascript:")
        || lowered.starts_with("mailto:")
        || lowered.starts_with("tel:")
        || lowered.starts_with("data:")
    {
        return None;
    }

    match base_url.join(href) {
        Ok(mut absolute_url) if matches!(absolute_url.scheme(), "http" | "https") => {
            absolute_url.set_fragment(None);
            Some(absolute_url)
        }
        _ => None,
    }
}
