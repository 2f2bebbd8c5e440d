use serde::Serialize;

use crate::checker::{AnalysisReport, CheckResult, CheckStatus};
use crate::config::Settings;
use crate::error::Result;

use super::ReportFormatter;

/// Machine-readable report. Details are never truncated.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    overall: CheckStatus,
    summary: Summary<'a>,
    settings: &'a Settings,
    checks: &'a [CheckResult],
}

#[derive(Serialize)]
struct Summary<'a> {
    text: &'a str,
    commits_analyzed: usize,
    files_analyzed: usize,
    fingerprint: &'a str,
    passed: usize,
    warnings: usize,
    failed: usize,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &AnalysisReport) -> Result<String> {
        let output = JsonOutput {
            overall: report.overall,
            summary: Summary {
                text: &report.summary,
                commits_analyzed: report.commits_analyzed,
                files_analyzed: report.files_analyzed,
                fingerprint: &report.fingerprint,
                passed: report.results.iter().filter(|r| r.is_passed()).count(),
                warnings: report.warning_count(),
                failed: report.failed_count(),
            },
            settings: &report.settings,
            checks: &report.results,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
