//! JSON report persistence

use super::ComplianceReport;
use crate::url::extract_netloc;
use crate::AnalyzerError;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use url::Url;

/// Renders a report as pretty-printed JSON (two-space indent)
pub fn to_json_string(report: &ComplianceReport) -> Result<String, AnalyzerError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// File name for a report: `ai_compliance_report_{netloc}_{YYYYmmdd_HHMMSS}.json`
///
/// The network location comes from the report URL with `:` replaced by `_`,
/// and the timestamp is the report's own analysis time.
pub fn report_filename(report: &ComplianceReport) -> Result<String, AnalyzerError> {
    let url = Url::parse(&report.url)?;
    let netloc = extract_netloc(&url).replace(':', "_");
    let stamp = report.analysis_timestamp.format("%Y%m%d_%H%M%S");

    Ok(format!("ai_compliance_report_{}_{}.json", netloc, stamp))
}

/// Writes the report as JSON into `output_dir`
///
/// # Arguments
///
/// * `report` - The report to persist
/// * `output_dir` - Existing directory to write into
///
/// # Returns
///
/// * `Ok(PathBuf)` - Path of the written file
/// * `Err(AnalyzerError)` - Serialization or file I/O failed
pub fn save_report(report: &ComplianceReport, output_dir: &Path) -> Result<PathBuf, AnalyzerError> {
    let path = output_dir.join(report_filename(report)?);
    let json = to_json_string(report)?;

    let mut file = File::create(&path)?;
    file.write_all(json.as_bytes())?;

    tracing::info!("Report saved to {}", path.display());
    Ok(path)
}
