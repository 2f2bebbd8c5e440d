use std::fmt::Write;

use crate::checker::{AnalysisReport, CheckResult, CheckStatus};
use crate::config::DEFAULT_MAX_DETAILS;
use crate::error::Result;

use super::{ReportFormatter, ansi, truncate_details};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
    max_details: usize,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
            max_details: DEFAULT_MAX_DETAILS,
        }
    }

    /// Details shown per check; zero shows all.
    #[must_use]
    pub const fn with_max_details(mut self, max_details: usize) -> Self {
        self.max_details = max_details;
        self
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    const fn status_icon(status: CheckStatus) -> &'static str {
        match status {
            CheckStatus::Pass => "✓",
            CheckStatus::Warning => "⚠",
            CheckStatus::Fail => "✗",
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn colorize(&self, text: &str, status: CheckStatus) -> String {
        let color = match status {
            CheckStatus::Pass => ansi::GREEN,
            CheckStatus::Warning => ansi::YELLOW,
            CheckStatus::Fail => ansi::RED,
        };
        self.paint(text, color)
    }

    fn format_result(&self, result: &CheckResult, output: &mut String) {
        let icon = Self::status_icon(result.status);
        let label = self.colorize(&result.status.as_str().to_uppercase(), result.status);
        writeln!(output, "{icon} {label}: {}", result.title).ok();

        if self.verbose > 0 {
            writeln!(output, "   {}", self.paint(&result.description, ansi::DIM)).ok();
        }

        for detail in truncate_details(&result.details, self.max_details) {
            writeln!(output, "   - {detail}").ok();
        }

        if self.verbose > 0 && !result.metrics.is_empty() {
            let metrics: Vec<String> = result
                .metrics
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect();
            writeln!(output, "   {}", self.paint(&metrics.join(", "), ansi::DIM)).ok();
        }
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();

        writeln!(
            output,
            "Diff provenance: {} commit(s), {} file(s)\n",
            report.commits_analyzed, report.files_analyzed
        )
        .ok();

        for result in &report.results {
            self.format_result(result, &mut output);
        }

        let overall = self.colorize(&report.overall.as_str().to_uppercase(), report.overall);
        writeln!(output, "\nOverall: {overall} - {}", report.summary).ok();

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
