//! Report aggregation
//!
//! Combines the six category results into the overall percentage, tier and
//! priority actions. Aggregation is a pure function of its inputs plus the
//! timestamp.

use super::{ComplianceReport, ComplianceTier};
use crate::scoring::rubric::RUBRIC_VERSION;
use crate::scoring::{round1, Category, CategoryResult};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Denominator of the overall percentage
///
/// This is larger than the sum of the category maxima (230), so a perfect
/// score reports 92%.
pub const REPORT_CEILING: u32 = 250;

/// Maximum number of priority actions in a report
pub const MAX_PRIORITY_ACTIONS: usize = 5;

/// A category needs attention below this share of its maximum
pub const ATTENTION_RATIO: f64 = 0.5;

/// Actions reported when no category needs attention
pub const MAINTENANCE_ACTIONS: [&str; 2] = [
    "Continue monitoring and maintaining current high standards",
    "Focus on creating fresh, expert content regularly",
];

/// Assembles a report stamped with the current time
///
/// # Arguments
///
/// * `results` - One result per category, in any order
/// * `url` - The analyzed start URL
pub fn aggregate(results: Vec<CategoryResult>, url: &str) -> ComplianceReport {
    aggregate_at(results, url, Utc::now())
}

/// Assembles a report with an explicit timestamp
pub fn aggregate_at(
    results: Vec<CategoryResult>,
    url: &str,
    timestamp: DateTime<Utc>,
) -> ComplianceReport {
    let category_results: BTreeMap<Category, CategoryResult> = results
        .into_iter()
        .map(|result| (result.category, result))
        .collect();

    let total: u32 = category_results.values().map(|result| result.score).sum();
    let percent = overall_percent(total);
    let tier = ComplianceTier::from_percent(percent);
    let priority_actions = priority_actions(&category_results);

    tracing::debug!(
        "Aggregated {} categories: {}/{} points, {:.1}% ({})",
        category_results.len(),
        total,
        REPORT_CEILING,
        percent,
        tier
    );

    ComplianceReport {
        url: url.to_string(),
        analysis_timestamp: timestamp,
        overall_score_percent: round1(percent),
        compliance_tier: tier,
        recommendation: tier.recommendation().to_string(),
        category_results,
        priority_actions,
        rubric_version: RUBRIC_VERSION.to_string(),
    }
}

/// Unrounded overall percentage for a point total
pub fn overall_percent(total: u32) -> f64 {
    total as f64 / REPORT_CEILING as f64 * 100.0
}

/// Remediation sentences for underperforming categories
///
/// Categories are visited in declared order and truncated to
/// `MAX_PRIORITY_ACTIONS`. When nothing is below the attention ratio the two
/// maintenance actions are returned instead.
pub fn priority_actions(results: &BTreeMap<Category, CategoryResult>) -> Vec<String> {
    let actions: Vec<String> = results
        .values()
        .filter(|result| result.ratio() < ATTENTION_RATIO)
        .map(|result| result.category.remediation().to_string())
        .take(MAX_PRIORITY_ACTIONS)
        .collect();

    if actions.is_empty() {
        return MAINTENANCE_ACTIONS.iter().map(|s| s.to_string()).collect();
    }

    actions
}
