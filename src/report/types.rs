//! Report types
//!
//! The serialized field names follow the published report format: camelCase
//! for report fields, snake_case for category and signal keys, upper-case
//! tier names.

use crate::scoring::{Category, CategoryResult};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Qualitative band of the overall percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComplianceTier {
    Excellent,
    Good,
    Moderate,
    Poor,
}

impl ComplianceTier {
    /// Picks the tier for an overall percentage
    ///
    /// Boundaries are inclusive on the lower side: exactly 80.0 is
    /// `Excellent`, exactly 60.0 is `Good`, exactly 40.0 is `Moderate`.
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 80.0 {
            Self::Excellent
        } else if percent >= 60.0 {
            Self::Good
        } else if percent >= 40.0 {
            Self::Moderate
        } else {
            Self::Poor
        }
    }

    /// Upper-case tier name as it appears in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "EXCELLENT",
            Self::Good => "GOOD",
            Self::Moderate => "MODERATE",
            Self::Poor => "POOR",
        }
    }

    /// One-line recommendation shown with the tier
    pub fn recommendation(&self) -> &'static str {
        match self {
            Self::Excellent => "Your website is highly AI-compliant!",
            Self::Good => "Good compliance with room for improvement.",
            Self::Moderate => "Moderate compliance - several areas need attention.",
            Self::Poor => "Poor compliance - significant improvements needed.",
        }
    }
}

impl fmt::Display for ComplianceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The final analysis report
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport {
    /// The analyzed start URL
    pub url: String,

    /// When the report was assembled (UTC)
    pub analysis_timestamp: DateTime<Utc>,

    /// Overall score as a percentage, rounded to one decimal
    pub overall_score_percent: f64,

    pub compliance_tier: ComplianceTier,

    pub recommendation: String,

    /// Per-category breakdown, keyed and ordered by category
    pub category_results: BTreeMap<Category, CategoryResult>,

    /// At most five remediation actions, in category order
    pub priority_actions: Vec<String>,

    /// Version of the scoring rubric that produced the scores
    pub rubric_version: String,
}

impl ComplianceReport {
    /// Looks up one category's result
    pub fn category(&self, category: Category) -> Option<&CategoryResult> {
        self.category_results.get(&category)
    }

    /// Sum of all category scores
    pub fn total_score(&self) -> u32 {
        self.category_results.values().map(|result| result.score).sum()
    }
}
