//! Analysis pipeline
//!
//! Ties the crawler, the category scorers and the report aggregator together:
//! normalize the target, crawl, score the page set, probe the start URL for
//! mobile signals, aggregate.

use crate::config::Config;
use crate::crawler::{Crawler, HttpFetcher, PageFetch};
use crate::page::PageSet;
use crate::report::{aggregate, ComplianceReport};
use crate::scoring::{analyze_mobile_optimization, score_page_set};
use crate::url::normalize_target;
use crate::Result;
use std::time::Instant;

/// Runs complete compliance analyses against one transport
pub struct Analyzer<F: PageFetch> {
    fetcher: F,
    config: Config,
}

impl Analyzer<HttpFetcher> {
    /// Creates an analyzer that fetches over HTTP
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be built from the configuration.
    pub fn from_config(config: Config) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self::new(fetcher, config))
    }
}

impl<F: PageFetch> Analyzer<F> {
    /// Creates an analyzer over any `PageFetch` implementation
    pub fn new(fetcher: F, config: Config) -> Self {
        Self { fetcher, config }
    }

    /// Analyzes a website and returns its compliance report
    ///
    /// # Arguments
    ///
    /// * `target` - Website address; `https://` is assumed when no scheme is given
    ///
    /// # Returns
    ///
    /// * `Ok(ComplianceReport)` - The complete report
    /// * `Err(AnalyzerError::NoPagesCrawled)` - Not a single page could be fetched
    /// * `Err(AnalyzerError::UrlError)` - The target is not a usable URL
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ai_compliance::{Analyzer, Config};
    ///
    /// # async fn run() -> ai_compliance::Result<()> {
    /// let analyzer = Analyzer::from_config(Config::default())?;
    /// let report = analyzer.analyze("example.com").await?;
    /// println!("{}: {}", report.url, report.compliance_tier);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn analyze(&self, target: &str) -> Result<ComplianceReport> {
        let start_url = normalize_target(target)?;
        let started = Instant::now();
        tracing::info!("Starting AI compliance analysis for {}", start_url);

        let crawler = Crawler::new(&self.fetcher, &self.config.crawler);
        let pages = crawler
            .crawl(&start_url, self.config.crawler.max_pages)
            .await;
        let pages = PageSet::new(pages, &start_url)?;

        tracing::info!("Scoring {} pages", pages.len());
        let mut results = score_page_set(&pages, &start_url);
        results.push(analyze_mobile_optimization(&self.fetcher, &start_url).await);

        let report = aggregate(results, start_url.as_str());
        tracing::info!(
            "Analysis of {} complete in {:?}: {:.1}% ({})",
            report.url,
            started.elapsed(),
            report.overall_score_percent,
            report.compliance_tier
        );

        Ok(report)
    }
}
