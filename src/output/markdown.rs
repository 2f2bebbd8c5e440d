use std::fmt::Write;

use crate::checker::{AnalysisReport, CheckStatus};
use crate::config::DEFAULT_MAX_DETAILS;
use crate::error::Result;

use super::{ReportFormatter, truncate_details};

pub struct MarkdownFormatter {
    max_details: usize,
}

impl MarkdownFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_details: DEFAULT_MAX_DETAILS,
        }
    }

    #[must_use]
    pub const fn with_max_details(mut self, max_details: usize) -> Self {
        self.max_details = max_details;
        self
    }

    const fn status_icon(status: CheckStatus) -> &'static str {
        match status {
            CheckStatus::Pass => "✅",
            CheckStatus::Warning => "⚠️",
            CheckStatus::Fail => "❌",
        }
    }

    const fn status_text(status: CheckStatus) -> &'static str {
        match status {
            CheckStatus::Pass => "Pass",
            CheckStatus::Warning => "Warning",
            CheckStatus::Fail => "Fail",
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Pipes inside table cells would split the column.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "## Diff Provenance Report\n").ok();
        writeln!(
            output,
            "{} **{}**: {}\n",
            Self::status_icon(report.overall),
            Self::status_text(report.overall),
            report.summary
        )
        .ok();
        writeln!(output, "| Metric | Count |").ok();
        writeln!(output, "|--------|------:|").ok();
        writeln!(output, "| Commits | {} |", report.commits_analyzed).ok();
        writeln!(output, "| Files | {} |", report.files_analyzed).ok();
        writeln!(output).ok();

        writeln!(output, "| Status | Check | Findings |").ok();
        writeln!(output, "|:------:|-------|---------:|").ok();
        for result in &report.results {
            writeln!(
                output,
                "| {} {} | {} | {} |",
                Self::status_icon(result.status),
                Self::status_text(result.status),
                escape_cell(&result.title),
                result.details.len()
            )
            .ok();
        }

        let flagged: Vec<_> = report.results.iter().filter(|r| !r.is_passed()).collect();
        if !flagged.is_empty() {
            writeln!(output, "\n### Details").ok();
            for result in flagged {
                writeln!(output, "\n#### {}\n", result.title).ok();
                writeln!(output, "_{}_\n", result.description).ok();
                for detail in truncate_details(&result.details, self.max_details) {
                    writeln!(output, "- {detail}").ok();
                }
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
