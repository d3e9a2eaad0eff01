//! Technical Performance scorer

use super::{round1, rubric, signals, Category, CategoryResult};
use crate::page::PageSet;
use crate::url::is_clean_url;
use url::Url;

/// Scores Technical Performance (max 50)
///
/// SSL is judged on the start URL alone. Page speed averages only the pages
/// whose response was timed; when none were, it scores zero and no
/// `avgResponseSeconds` metric is reported.
pub fn score_technical_performance(pages: &PageSet, start_url: &Url) -> CategoryResult {
    let ssl_security = rubric::flag_points(start_url.scheme() == "https", rubric::SSL_SECURITY_POINTS);

    let clean_ratio = pages.proportion(|page| is_clean_url(&page.url));
    let viewport_ratio = pages.proportion(|page| signals::has_viewport(&page.document));

    let timings: Vec<f64> = pages.iter().filter_map(|page| page.elapsed_seconds()).collect();
    let avg_response = if timings.is_empty() {
        None
    } else {
        Some(timings.iter().sum::<f64>() / timings.len() as f64)
    };
    let page_speed = avg_response.map_or(0, |seconds| rubric::PAGE_SPEED.points(seconds));

    let result = CategoryResult::from_details(
        Category::TechnicalPerformance,
        [
            ("ssl_security", ssl_security),
            ("clean_urls", rubric::CLEAN_URLS.points(clean_ratio)),
            ("mobile_friendly", rubric::MOBILE_FRIENDLY.points(viewport_ratio)),
            ("page_speed", page_speed),
        ],
    );

    match avg_response {
        Some(seconds) => result.with_metric("avgResponseSeconds", round1(seconds)),
        None => result,
    }
}
