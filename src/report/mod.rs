//! Report module for aggregating and publishing analysis results
//!
//! This module handles:
//! - Combining category results into the overall score, tier and actions
//! - Saving reports as timestamped JSON files
//! - Rendering markdown reports and the console summary

mod aggregate;
mod json;
mod markdown;
mod summary;
mod types;

pub use aggregate::{
    aggregate, aggregate_at, overall_percent, priority_actions, MAINTENANCE_ACTIONS,
    MAX_PRIORITY_ACTIONS, REPORT_CEILING,
};
pub use json::{report_filename, save_report, to_json_string};
pub use markdown::{format_markdown_report, generate_markdown_report};
pub use summary::{format_summary, print_report};
pub use types::{ComplianceReport, ComplianceTier};
