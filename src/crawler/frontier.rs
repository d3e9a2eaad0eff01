//! Crawl frontier: the FIFO work queue plus the visited set
//!
//! The frontier is owned by a single crawler and mutated only from the crawl
//! loop, so it needs no synchronization.

use std::collections::{HashSet, VecDeque};
use url::Url;

/// Breadth-first work queue with visited-set bookkeeping
///
/// A URL can sit in the queue more than once (it may be linked from several
/// pages before it is fetched), but `next_unvisited` hands each URL out at
/// most once per run.
#[derive(Debug, Default)]
pub struct CrawlFrontier {
    /// URLs waiting to be fetched, in discovery order
    queue: VecDeque<Url>,

    /// URLs already handed out for fetching
    visited: HashSet<String>,
}

impl CrawlFrontier {
    /// Creates a frontier seeded with the start URL
    pub fn new(start_url: Url) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(start_url);
        Self {
            queue,
            visited: HashSet::new(),
        }
    }

    /// Pops URLs until one that has not been visited is found
    ///
    /// The returned URL is marked visited before it is handed out, so it will
    /// never be returned again even if the fetch fails.
    ///
    /// # Returns
    ///
    /// * `Some(Url)` - The next URL to fetch
    /// * `None` - The queue is exhausted
    pub fn next_unvisited(&mut self) -> Option<Url> {
        while let Some(url) = self.queue.pop_front() {
            if self.visited.insert(url.as_str().to_string()) {
                return Some(url);
            }
            tracing::trace!("Skipping already visited URL: {}", url);
        }
        None
    }

    /// Enqueues a URL unless it has already been visited
    ///
    /// # Returns
    ///
    /// * `true` - The URL was added to the queue
    /// * `false` - The URL was already visited
    pub fn enqueue(&mut self, url: Url) -> bool {
        if self.is_visited(&url) {
            return false;
        }
        self.queue.push_back(url);
        true
    }

    /// Returns true if the URL has been handed out already
    pub fn is_visited(&self, url: &Url) -> bool {
        self.visited.contains(url.as_str())
    }

    /// Returns true if nothing is left to fetch
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of URLs visited so far
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}
