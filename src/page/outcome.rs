//! Outcome definitions for a single fetch attempt during the crawl
use crate::page::CrawledPage;
use std::fmt;

/// Why a page attempt did not produce a crawled page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Server answered with something other than HTTP 200
    HttpStatus(u16),

    /// Timeout, connection failure, or unreadable response
    Transport(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HttpStatus(code) => write!(f, "HTTP {}", code),
            Self::Transport(message) => write!(f, "{}", message),
        }
    }
}

/// Result of one fetch attempt
///
/// The crawler only keeps `Fetched` outcomes; `Skipped` ones are logged and
/// dropped.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The page was fetched with HTTP 200 and parsed
    Fetched(CrawledPage),

    /// The page was dropped
    Skipped(SkipReason),
}
