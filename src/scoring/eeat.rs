//! E-E-A-T scorer (experience, expertise, authoritativeness, trust)

use super::{rubric, signals, Category, CategoryResult};
use crate::page::PageSet;

/// Scores E-E-A-T Factors (max 20)
pub fn score_eat_factors(pages: &PageSet) -> CategoryResult {
    let author_ratio = pages.proportion(|page| signals::has_author_marker(&page.document));
    let credibility_ratio = pages.proportion(|page| {
        signals::has_credibility_signal(&signals::lowercase_text(&page.document))
    });
    let freshness_ratio = pages.proportion(|page| signals::has_date_marker(&page.document));

    CategoryResult::from_details(
        Category::EatFactors,
        [
            ("author_info", rubric::AUTHOR_INFO.points(author_ratio)),
            (
                "credibility_signals",
                rubric::CREDIBILITY_SIGNALS.points(credibility_ratio),
            ),
            (
                "content_freshness",
                rubric::CONTENT_FRESHNESS.points(freshness_ratio),
            ),
        ],
    )
}
