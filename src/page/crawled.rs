use crate::AnalyzerError;
use scraper::Html;
use std::time::Duration;
use url::Url;

/// A page that was fetched with HTTP 200 and parsed
///
/// Created once by the crawler and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct CrawledPage {
    /// The URL the page was requested as
    pub url: Url,

    /// The parsed document tree
    pub document: Html,

    /// The raw response body
    pub raw_body: String,

    /// HTTP status code (always 200 for crawled pages)
    pub status_code: u16,

    /// Time until response headers arrived; `None` when the transport could not time it
    pub elapsed: Option<Duration>,
}

impl CrawledPage {
    /// Builds a page by parsing the given body
    pub fn new(url: Url, raw_body: String, status_code: u16, elapsed: Option<Duration>) -> Self {
        let document = Html::parse_document(&raw_body);
        Self {
            url,
            document,
            raw_body,
            status_code,
            elapsed,
        }
    }

    /// Returns the elapsed time in seconds, if it was measured
    pub fn elapsed_seconds(&self) -> Option<f64> {
        self.elapsed.map(|d| d.as_secs_f64())
    }
}

/// A non-empty, ordered set of crawled pages
///
/// Every scorer averages over the page set, so the set is guaranteed to hold
/// at least one page at construction time.
#[derive(Debug, Clone)]
pub struct PageSet {
    pages: Vec<CrawledPage>,
}

impl PageSet {
    /// Wraps crawled pages into a page set
    ///
    /// # Arguments
    ///
    /// * `pages` - Pages in crawl order
    /// * `start_url` - The analysis target, used in the error message
    ///
    /// # Returns
    ///
    /// * `Ok(PageSet)` - At least one page was crawled
    /// * `Err(AnalyzerError::NoPagesCrawled)` - The list was empty
    pub fn new(pages: Vec<CrawledPage>, start_url: &Url) -> Result<Self, AnalyzerError> {
        if pages.is_empty() {
            return Err(AnalyzerError::NoPagesCrawled {
                url: start_url.to_string(),
            });
        }
        Ok(Self { pages })
    }

    /// Number of pages in the set (never zero)
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always false; present for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates pages in crawl order
    pub fn iter(&self) -> std::slice::Iter<'_, CrawledPage> {
        self.pages.iter()
    }

    /// Returns the pages as a slice
    pub fn pages(&self) -> &[CrawledPage] {
        &self.pages
    }

    /// Fraction of pages for which `predicate` holds
    pub fn proportion<F>(&self, predicate: F) -> f64
    where
        F: Fn(&CrawledPage) -> bool,
    {
        self.count(predicate) as f64 / self.len() as f64
    }

    /// Number of pages for which `predicate` holds
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CrawledPage) -> bool,
    {
        self.pages.iter().filter(|page| predicate(page)).count()
    }

    /// Mean of `measure` over all pages
    pub fn average<F>(&self, measure: F) -> f64
    where
        F: Fn(&CrawledPage) -> usize,
    {
        let total: usize = self.pages.iter().map(measure).sum();
        total as f64 / self.len() as f64
    }
}

impl<'a> IntoIterator for &'a PageSet {
    type Item = &'a CrawledPage;
    type IntoIter = std::slice::Iter<'a, CrawledPage>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}
