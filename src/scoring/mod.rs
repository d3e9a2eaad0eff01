//! Category scoring engine
//!
//! Six independent scorers turn the crawled page set into one
//! `CategoryResult` each. Every scorer is a pure function of its input; the
//! thresholds they apply live in [`rubric`].
//!
//! | Category | Max | Scorer |
//! |---|---|---|
//! | Content Quality | 80 | [`score_content_quality`] |
//! | Technical Performance | 50 | [`score_technical_performance`] |
//! | Semantic Structure | 35 | [`score_semantic_structure`] |
//! | AI Readiness | 30 | [`score_ai_readiness`] |
//! | E-E-A-T | 20 | [`score_eat_factors`] |
//! | Mobile & AI Optimization | 15 | [`score_mobile_optimization`] |

mod ai_readiness;
mod content;
mod eeat;
mod mobile;
pub mod rubric;
mod semantic;
pub mod signals;
mod technical;

pub use ai_readiness::score_ai_readiness;
pub use content::score_content_quality;
pub use eeat::score_eat_factors;
pub use mobile::{analyze_mobile_optimization, score_mobile_optimization};
pub use semantic::score_semantic_structure;
pub use technical::score_technical_performance;

use crate::page::PageSet;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use url::Url;

/// Scoring category, in the fixed order used for reports and priority actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    ContentQuality,
    TechnicalPerformance,
    SemanticStructure,
    AiReadiness,
    EatFactors,
    MobileAiOptimization,
}

impl Category {
    /// All categories in declared order
    pub const ALL: [Category; 6] = [
        Self::ContentQuality,
        Self::TechnicalPerformance,
        Self::SemanticStructure,
        Self::AiReadiness,
        Self::EatFactors,
        Self::MobileAiOptimization,
    ];

    /// Report key of the category
    pub fn key(&self) -> &'static str {
        match self {
            Self::ContentQuality => "content_quality",
            Self::TechnicalPerformance => "technical_performance",
            Self::SemanticStructure => "semantic_structure",
            Self::AiReadiness => "ai_readiness",
            Self::EatFactors => "eat_factors",
            Self::MobileAiOptimization => "mobile_ai_optimization",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::ContentQuality => "Content Quality",
            Self::TechnicalPerformance => "Technical Performance",
            Self::SemanticStructure => "Semantic Structure",
            Self::AiReadiness => "AI Readiness",
            Self::EatFactors => "E-E-A-T Factors",
            Self::MobileAiOptimization => "Mobile & AI Optimization",
        }
    }

    /// Fixed maximum score of the category
    pub fn max_score(&self) -> u32 {
        match self {
            Self::ContentQuality => 80,
            Self::TechnicalPerformance => 50,
            Self::SemanticStructure => 35,
            Self::AiReadiness => 30,
            Self::EatFactors => 20,
            Self::MobileAiOptimization => 15,
        }
    }

    /// Remediation sentence used when the category underperforms
    pub fn remediation(&self) -> &'static str {
        match self {
            Self::ContentQuality => {
                "Improve content depth and semantic richness with longer, well-structured articles"
            }
            Self::TechnicalPerformance => {
                "Optimize page speed, implement SSL, and ensure mobile-friendly design"
            }
            Self::SemanticStructure => {
                "Add structured data markup and improve semantic HTML structure"
            }
            Self::AiReadiness => {
                "Create more conversational, question-answering content for AI engines"
            }
            Self::EatFactors => {
                "Add author information, credibility signals, and update content dates"
            }
            Self::MobileAiOptimization => {
                "Improve mobile responsiveness and Core Web Vitals performance"
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A category-specific extra measurement reported next to the details
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Integer(u64),
    Decimal(f64),
}

impl From<u64> for MetricValue {
    fn from(value: u64) -> Self {
        Self::Integer(value)
    }
}

impl From<usize> for MetricValue {
    fn from(value: usize) -> Self {
        Self::Integer(value as u64)
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{}", value),
            Self::Decimal(value) => write!(f, "{}", value),
        }
    }
}

/// Score breakdown for one category
///
/// `score` is always the sum of `details`. Extra measurements (averages, page
/// counts) are flattened into the serialized object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResult {
    #[serde(skip)]
    pub category: Category,
    pub score: u32,
    pub max_score: u32,
    pub details: BTreeMap<String, u32>,
    #[serde(flatten)]
    pub metrics: BTreeMap<String, MetricValue>,
}

impl CategoryResult {
    /// Builds a result from per-signal points
    pub fn from_details<'a, I>(category: Category, details: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, u32)>,
    {
        let details: BTreeMap<String, u32> = details
            .into_iter()
            .map(|(name, points)| (name.to_string(), points))
            .collect();

        Self {
            category,
            score: details.values().sum(),
            max_score: category.max_score(),
            details,
            metrics: BTreeMap::new(),
        }
    }

    /// Attaches an extra measurement
    pub fn with_metric(mut self, name: &str, value: impl Into<MetricValue>) -> Self {
        self.metrics.insert(name.to_string(), value.into());
        self
    }

    /// Points awarded for one signal, if the category has it
    pub fn detail(&self, signal: &str) -> Option<u32> {
        self.details.get(signal).copied()
    }

    /// Share of the category maximum that was reached, in `[0, 1]`
    pub fn ratio(&self) -> f64 {
        if self.max_score == 0 {
            return 0.0;
        }
        self.score as f64 / self.max_score as f64
    }

    /// Share of the category maximum as a percentage
    pub fn percent(&self) -> f64 {
        self.ratio() * 100.0
    }
}

/// Runs the five page-set scorers in declared order
///
/// Mobile & AI Optimization is not included: it needs its own probe fetch,
/// see [`analyze_mobile_optimization`].
pub fn score_page_set(pages: &PageSet, start_url: &Url) -> Vec<CategoryResult> {
    vec![
        score_content_quality(pages),
        score_technical_performance(pages, start_url),
        score_semantic_structure(pages),
        score_ai_readiness(pages),
        score_eat_factors(pages),
    ]
}

/// Rounds to one decimal place
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::page::{CrawledPage, PageSet};
    use std::time::Duration;
    use url::Url;

    /// Builds a 200 page at `url` with a fast response time
    pub fn page_at(url: &str, body: &str) -> CrawledPage {
        CrawledPage::new(
            Url::parse(url).unwrap(),
            body.to_string(),
            200,
            Some(Duration::from_millis(300)),
        )
    }

    /// Builds a page set from `(url, body)` pairs
    pub fn page_set(pages: &[(&str, &str)]) -> PageSet {
        let pages: Vec<CrawledPage> = pages.iter().map(|(url, body)| page_at(url, body)).collect();
        let start = pages[0].url.clone();
        PageSet::new(pages, &start).unwrap()
    }

    /// Builds a page set of bodies served from distinct clean paths
    pub fn bodies(bodies: &[&str]) -> PageSet {
        let urls: Vec<String> = (0..bodies.len())
            .map(|i| format!("https://example.com/page-{}", i))
            .collect();
        let pairs: Vec<(&str, &str)> = urls
            .iter()
            .zip(bodies)
            .map(|(url, body)| (url.as_str(), *body))
            .collect();
        page_set(&pairs)
    }
}
