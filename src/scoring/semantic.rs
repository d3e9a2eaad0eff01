//! Semantic Structure scorer

use super::{rubric, signals, Category, CategoryResult};
use crate::page::PageSet;

/// Scores Semantic Structure (max 35)
///
/// Reports `structuredDataPages` and `semanticHtmlPages` alongside the points.
pub fn score_semantic_structure(pages: &PageSet) -> CategoryResult {
    let structured_pages = pages.count(|page| signals::has_structured_data(&page.document));
    let semantic_pages = pages.count(|page| {
        signals::semantic_element_count(&page.document) >= rubric::MIN_SEMANTIC_ELEMENTS
    });
    let meta_ratio = pages.proportion(|page| signals::has_optimized_meta(&page.document));

    let total = pages.len() as f64;

    CategoryResult::from_details(
        Category::SemanticStructure,
        [
            (
                "structured_data",
                rubric::STRUCTURED_DATA.points(structured_pages as f64 / total),
            ),
            (
                "semantic_html",
                rubric::SEMANTIC_HTML.points(semantic_pages as f64 / total),
            ),
            ("meta_optimization", rubric::META_OPTIMIZATION.points(meta_ratio)),
        ],
    )
    .with_metric("structuredDataPages", structured_pages)
    .with_metric("semanticHtmlPages", semantic_pages)
}
