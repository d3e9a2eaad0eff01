//! Mobile & AI Optimization scorer
//!
//! Unlike the other categories this one does not reuse the crawl result: it
//! issues its own request for the start URL and scores that response. The
//! probe's status code is not checked.

use super::{rubric, signals, Category, CategoryResult};
use crate::crawler::{FetchResponse, PageFetch};
use scraper::Html;
use url::Url;

/// Fetches the start URL once more and scores the response
///
/// A failed probe is logged and yields a zero result; it never aborts the
/// analysis.
///
/// # Arguments
///
/// * `fetcher` - Transport used for the probe request
/// * `start_url` - The analysis target
pub async fn analyze_mobile_optimization<F: PageFetch>(
    fetcher: &F,
    start_url: &Url,
) -> CategoryResult {
    match fetcher.fetch(start_url).await {
        Ok(response) => {
            tracing::debug!(
                "Mobile probe of {} returned {} in {:?}",
                start_url,
                response.status,
                response.elapsed
            );
            score_mobile_optimization(Some(&response))
        }
        Err(e) => {
            tracing::warn!("Mobile analysis failed for {}: {}", start_url, e);
            score_mobile_optimization(None)
        }
    }
}

/// Scores Mobile & AI Optimization (max 15) from a probe response
///
/// `None` stands for a failed probe and scores zero on both signals. An
/// untimed response earns no Core Web Vitals points.
pub fn score_mobile_optimization(probe: Option<&FetchResponse>) -> CategoryResult {
    let (responsive, latency) = match probe {
        Some(response) => {
            let document = Html::parse_document(&response.body);
            let responsive = signals::viewport_content(&document)
                .map_or(false, |content| content.contains(rubric::RESPONSIVE_VIEWPORT_MARKER));
            (responsive, response.elapsed.map(|d| d.as_secs_f64()))
        }
        None => (false, None),
    };

    CategoryResult::from_details(
        Category::MobileAiOptimization,
        [
            (
                "responsive_design",
                rubric::flag_points(responsive, rubric::RESPONSIVE_DESIGN_POINTS),
            ),
            (
                "core_web_vitals",
                latency.map_or(0, |seconds| rubric::CORE_WEB_VITALS.points(seconds)),
            ),
        ],
    )
}
