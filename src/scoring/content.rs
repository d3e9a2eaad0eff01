//! Content Quality scorer
//!
//! Measures how much there is to read: words, headings and paragraphs per
//! page, averaged over the whole page set.

use super::{round1, rubric, signals, Category, CategoryResult};
use crate::page::PageSet;

/// Scores Content Quality (max 80)
///
/// `keyword_optimization` is a reserved signal that currently always scores
/// zero; it accounts for the gap between the 60 reachable points and the
/// category maximum.
///
/// # Arguments
///
/// * `pages` - The crawled page set
///
/// # Returns
///
/// A `CategoryResult` with the per-signal points plus `avgWordsPerPage` and
/// `avgHeadingsPerPage`.
pub fn score_content_quality(pages: &PageSet) -> CategoryResult {
    let avg_words = pages.average(|page| signals::word_count(&page.document));
    let avg_headings = pages.average(|page| signals::heading_count(&page.document));
    let avg_paragraphs = pages.average(|page| signals::paragraph_count(&page.document));

    tracing::debug!(
        "Content quality: {:.1} words, {:.1} headings, {:.1} paragraphs per page",
        avg_words,
        avg_headings,
        avg_paragraphs
    );

    CategoryResult::from_details(
        Category::ContentQuality,
        [
            ("content_depth", rubric::CONTENT_DEPTH.points(avg_words)),
            ("semantic_richness", rubric::SEMANTIC_RICHNESS.points(avg_headings)),
            ("readability", rubric::READABILITY.points(avg_paragraphs)),
            ("keyword_optimization", 0),
        ],
    )
    .with_metric("avgWordsPerPage", avg_words.round() as u64)
    .with_metric("avgHeadingsPerPage", round1(avg_headings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::test_support::bodies;
    use crate::scoring::MetricValue;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_long_structured_pages_score_max() {
        let body = format!(
            "<h1>a</h1><h2>b</h2><h2>c</h2><h3>d</h3><h3>e</h3>{}",
            (0..5)
                .map(|_| format!("<p>{}</p>", words(250)))
                .collect::<String>()
        );
        let result = score_content_quality(&bodies(&[body.as_str(), body.as_str()]));

        assert_eq!(result.detail("content_depth"), Some(25));
        assert_eq!(result.detail("semantic_richness"), Some(20));
        assert_eq!(result.detail("readability"), Some(15));
        assert_eq!(result.detail("keyword_optimization"), Some(0));
        assert_eq!(result.score, 60);
        assert_eq!(result.max_score, 80);
    }

    #[test]
    fn test_empty_pages_get_floor_points() {
        let result = score_content_quality(&bodies(&["", ""]));
        assert_eq!(result.score, 30);
        assert_eq!(
            result.metrics.get("avgWordsPerPage"),
            Some(&MetricValue::Integer(0))
        );
    }

    #[test]
    fn test_averages_span_pages() {
        // 600 + 0 words averages to exactly 300
        let long = format!("<p>{}</p>", words(600));
        let result = score_content_quality(&bodies(&[long.as_str(), ""]));

        assert_eq!(result.detail("content_depth"), Some(15));
        assert_eq!(
            result.metrics.get("avgWordsPerPage"),
            Some(&MetricValue::Integer(300))
        );
    }

    #[test]
    fn test_heading_average_is_rounded() {
        let three = "<h1>a</h1><h2>b</h2><h3>c</h3>";
        let result = score_content_quality(&bodies(&[three, three, "<h4>x</h4>"]));

        assert_eq!(result.detail("semantic_richness"), Some(10));
        assert_eq!(
            result.metrics.get("avgHeadingsPerPage"),
            Some(&MetricValue::Decimal(2.3))
        );
    }

    #[test]
    fn test_script_text_is_not_counted_as_words() {
        let body = r#"<script type="application/ld+json">{"@type": "Product", "name": "Widget"}</script>
            <p>Catalogue</p><style>p { margin: 0 auto; }</style>"#;
        let result = score_content_quality(&bodies(&[body]));
        assert_eq!(
            result.metrics.get("avgWordsPerPage"),
            Some(&MetricValue::Integer(1))
        );
    }
}
