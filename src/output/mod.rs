mod error_output;
mod json;
mod markdown;
mod progress;
mod text;

pub use error_output::{ErrorOutput, print_error};
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use progress::CheckProgress;
pub use text::{ColorMode, TextFormatter};

/// ANSI color codes
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

use crate::checker::AnalysisReport;
use crate::error::Result;

/// Trait for rendering an analysis report into various output formats.
pub trait ReportFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &AnalysisReport) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Keep the first `cap` details and summarize the rest as `… and N more`.
///
/// A cap of zero shows everything. The engine never truncates; only the
/// human-facing formatters call this.
#[must_use]
pub fn truncate_details(details: &[String], cap: usize) -> Vec<String> {
    if cap == 0 || details.len() <= cap {
        return details.to_vec();
    }
    let mut shown = details[..cap].to_vec();
    shown.push(format!("… and {} more", details.len() - cap));
    shown
}

#[cfg(test)]
mod test_support;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
