//! Crawler module for page fetching and link following
//!
//! This module contains the crawling logic, including:
//! - The `PageFetch` seam and its `reqwest` implementation
//! - HTML link extraction
//! - The breadth-first frontier
//! - Overall crawl coordination under a page budget

mod coordinator;
mod fetcher;
mod frontier;
mod parser;

pub use coordinator::Crawler;
pub use fetcher::{build_http_client, fetch_url, FetchError, FetchResponse, HttpFetcher, PageFetch};
pub use frontier::CrawlFrontier;
pub use parser::extract_links;

use crate::config::Config;
use crate::page::CrawledPage;
use crate::AnalyzerError;
use url::Url;

/// Runs a complete crawl over HTTP
///
/// This is a convenience entry point that builds an `HttpFetcher` from the
/// configuration and crawls at most `config.crawler.max_pages` pages.
///
/// # Arguments
///
/// * `config` - The analyzer configuration
/// * `start_url` - The first page to fetch
///
/// # Returns
///
/// * `Ok(Vec<CrawledPage>)` - Pages fetched with HTTP 200, possibly empty
/// * `Err(AnalyzerError)` - The HTTP client could not be built
pub async fn crawl(config: &Config, start_url: &Url) -> Result<Vec<CrawledPage>, AnalyzerError> {
    let fetcher = HttpFetcher::new(config)?;
    let crawler = Crawler::new(&fetcher, &config.crawler);
    Ok(crawler.crawl(start_url, config.crawler.max_pages).await)
}
