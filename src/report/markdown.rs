//! Markdown report generation
//!
//! Renders a compliance report as a human-readable markdown document with the
//! score table, per-signal details and the priority actions.

use super::ComplianceReport;
use crate::AnalyzerError;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes a markdown rendering of the report
///
/// # Arguments
///
/// * `report` - The report to render
/// * `output_path` - Path where the markdown file should be written
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the markdown file
/// * `Err(AnalyzerError)` - Failed to write the file
pub fn generate_markdown_report(
    report: &ComplianceReport,
    output_path: &Path,
) -> Result<(), AnalyzerError> {
    let markdown = format_markdown_report(report);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    tracing::info!("Markdown report written to {}", output_path.display());
    Ok(())
}

/// Formats a report as markdown
pub fn format_markdown_report(report: &ComplianceReport) -> String {
    let mut md = String::new();

    // Title
    md.push_str("# AI Compliance Report\n\n");

    // Run metadata
    md.push_str("## Run Information\n\n");
    md.push_str(&format!("- **Website**: {}\n", report.url));
    md.push_str(&format!(
        "- **Analyzed**: {}\n",
        report.analysis_timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    md.push_str(&format!("- **Rubric Version**: {}\n\n", report.rubric_version));

    // Overall result
    md.push_str("## Overall Result\n\n");
    md.push_str(&format!(
        "- **Score**: {:.1}%\n",
        report.overall_score_percent
    ));
    md.push_str(&format!("- **Tier**: {}\n", report.compliance_tier));
    md.push_str(&format!("- **Recommendation**: {}\n\n", report.recommendation));

    // Category table
    md.push_str("## Category Scores\n\n");
    md.push_str("| Category | Score | Max | Percent |\n");
    md.push_str("|----------|-------|-----|---------|\n");
    for (category, result) in &report.category_results {
        md.push_str(&format!(
            "| {} | {} | {} | {:.1}% |\n",
            category.label(),
            result.score,
            result.max_score,
            result.percent()
        ));
    }
    md.push('\n');

    // Signal details
    md.push_str("## Details\n\n");
    for (category, result) in &report.category_results {
        md.push_str(&format!("### {}\n\n", category.label()));
        for (signal, points) in &result.details {
            md.push_str(&format!("- {}: {}\n", signal, points));
        }
        for (name, value) in &result.metrics {
            md.push_str(&format!("- *{}*: {}\n", name, value));
        }
        md.push('\n');
    }

    // Actions
    md.push_str("## Priority Actions\n\n");
    for (i, action) in report.priority_actions.iter().enumerate() {
        md.push_str(&format!("{}. {}\n", i + 1, action));
    }

    md
}
