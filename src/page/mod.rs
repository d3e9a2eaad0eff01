//! Page model for the crawl result
//!
//! # Components
//!
//! - `CrawledPage`: a fetched and parsed page
//! - `PageSet`: the non-empty page collection every scorer consumes
//! - `FetchOutcome` / `SkipReason`: the result of one fetch attempt

mod crawled;
mod outcome;

// Re-export main types
pub use crawled::{CrawledPage, PageSet};
pub use outcome::{FetchOutcome, SkipReason};
