//! Crawl coordinator - the bounded breadth-first crawl loop
//!
//! This module contains the crawl loop that ties together:
//! - The frontier queue and visited set
//! - Fetching through the `PageFetch` seam
//! - Link extraction and the internal-link filter
//! - The politeness delay between fetches

use crate::config::CrawlerConfig;
use crate::crawler::frontier::CrawlFrontier;
use crate::crawler::parser::extract_links;
use crate::crawler::PageFetch;
use crate::page::{CrawledPage, FetchOutcome, SkipReason};
use crate::url::is_internal_link;
use std::time::{Duration, Instant};
use url::Url;

/// Breadth-first crawler bounded by a page budget
///
/// One fetch is in flight at a time. Failed or non-200 pages are dropped and
/// never retried.
pub struct Crawler<'a, F: PageFetch> {
    fetcher: &'a F,
    max_links_per_page: usize,
    politeness_delay: Duration,
}

impl<'a, F: PageFetch> Crawler<'a, F> {
    /// Creates a new crawler
    ///
    /// # Arguments
    ///
    /// * `fetcher` - The transport used for every page request
    /// * `config` - Crawler settings (links per page, politeness delay)
    pub fn new(fetcher: &'a F, config: &CrawlerConfig) -> Self {
        Self {
            fetcher,
            max_links_per_page: config.max_links_per_page,
            politeness_delay: config.politeness_delay(),
        }
    }

    /// Crawls the site starting at `start_url`
    ///
    /// This method:
    /// 1. Pops the next unvisited URL from the frontier
    /// 2. Fetches it and keeps it only on HTTP 200
    /// 3. While under budget, enqueues internal targets of the page's leading links
    /// 4. Pauses before the next fetch
    ///
    /// # Arguments
    ///
    /// * `start_url` - The first page to fetch; also defines the site boundary
    /// * `max_pages` - Maximum number of pages to return
    ///
    /// # Returns
    ///
    /// Crawled pages in fetch order, at most `max_pages` of them. The list is
    /// empty when the start URL itself could not be fetched.
    pub async fn crawl(&self, start_url: &Url, max_pages: usize) -> Vec<CrawledPage> {
        tracing::info!("Crawling {} (max {} pages)", start_url, max_pages);

        let started = Instant::now();
        let mut frontier = CrawlFrontier::new(start_url.clone());
        let mut pages: Vec<CrawledPage> = Vec::new();
        let mut skipped = 0usize;

        while pages.len() < max_pages {
            let Some(url) = frontier.next_unvisited() else {
                tracing::debug!("Frontier is empty, crawl complete");
                break;
            };

            let page = match self.fetch_page(&url).await {
                FetchOutcome::Fetched(page) => page,
                FetchOutcome::Skipped(reason) => {
                    tracing::warn!("Failed to crawl {}: {}", url, reason);
                    skipped += 1;
                    continue;
                }
            };

            tracing::info!("Analyzed: {}", url);

            if pages.len() + 1 < max_pages {
                self.enqueue_links(&mut frontier, &page, start_url);
            }

            pages.push(page);

            if pages.len() < max_pages && !frontier.is_empty() && !self.politeness_delay.is_zero()
            {
                tokio::time::sleep(self.politeness_delay).await;
            }
        }

        tracing::info!(
            "Crawled {} pages successfully ({} skipped, {} visited) in {:?}",
            pages.len(),
            skipped,
            frontier.visited_count(),
            started.elapsed()
        );

        pages
    }

    /// Fetches one URL and classifies the attempt
    pub async fn fetch_page(&self, url: &Url) -> FetchOutcome {
        match self.fetcher.fetch(url).await {
            Ok(response) if response.status == 200 => FetchOutcome::Fetched(CrawledPage::new(
                url.clone(),
                response.body,
                response.status,
                response.elapsed,
            )),
            Ok(response) => FetchOutcome::Skipped(SkipReason::HttpStatus(response.status)),
            Err(e) => FetchOutcome::Skipped(SkipReason::Transport(e.to_string())),
        }
    }

    /// Adds the page's internal, unvisited link targets to the frontier
    fn enqueue_links(&self, frontier: &mut CrawlFrontier, page: &CrawledPage, start_url: &Url) {
        for link in extract_links(&page.document, &page.url, self.max_links_per_page) {
            if !is_internal_link(start_url, &link) {
                tracing::trace!("Ignoring external link: {}", link);
                continue;
            }

            if frontier.enqueue(link.clone()) {
                tracing::debug!("Queued: {}", link);
            }
        }
    }
}
