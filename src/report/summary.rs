//! Console summary of a report

use super::ComplianceReport;

/// Formats the console breakdown of a report
///
/// # Arguments
///
/// * `report` - The report to display
///
/// # Returns
///
/// The multi-line summary text, without a trailing newline
pub fn format_summary(report: &ComplianceReport) -> String {
    let mut lines = Vec::new();

    lines.push("=== AI Compliance Analysis ===".to_string());
    lines.push(String::new());
    lines.push(format!("Website: {}", report.url));
    lines.push(format!(
        "Overall Score: {:.1}%",
        report.overall_score_percent
    ));
    lines.push(format!("Compliance Tier: {}", report.compliance_tier));
    lines.push(format!("Recommendation: {}", report.recommendation));
    lines.push(String::new());

    lines.push("Category Breakdown:".to_string());
    for (category, result) in &report.category_results {
        lines.push(format!(
            "  {}: {}/{} ({:.1}%)",
            category.label(),
            result.score,
            result.max_score,
            result.percent()
        ));
    }
    lines.push(String::new());

    lines.push("Priority Actions:".to_string());
    for (i, action) in report.priority_actions.iter().enumerate() {
        lines.push(format!("  {}. {}", i + 1, action));
    }

    lines.join("\n")
}

/// Prints the report breakdown to stdout
pub fn print_report(report: &ComplianceReport) {
    println!("{}", format_summary(report));
}
