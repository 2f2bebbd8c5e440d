use serde::Serialize;

use super::{CheckResult, CheckStatus};
use crate::config::Settings;
use crate::corpus::Corpus;

/// Aggregate outcome of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub overall: CheckStatus,
    pub summary: String,
    pub commits_analyzed: usize,
    pub files_analyzed: usize,
    pub fingerprint: String,
    pub settings: Settings,
    pub results: Vec<CheckResult>,
}

impl AnalysisReport {
    #[must_use]
    pub fn new(corpus: &Corpus, settings: Settings, results: Vec<CheckResult>) -> Self {
        Self {
            overall: aggregate_status(&results),
            summary: summarize(&results),
            commits_analyzed: corpus.commit_count(),
            files_analyzed: corpus.file_count(),
            fingerprint: corpus.fingerprint().to_string(),
            settings,
            results,
        }
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failed()).count()
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_warning()).count()
    }

    #[must_use]
    pub fn result(&self, id: &str) -> Option<&CheckResult> {
        self.results.iter().find(|r| r.id == id)
    }
}

/// `fail` if any result failed, else `warning` if any warned, else `pass`.
#[must_use]
pub fn aggregate_status(results: &[CheckResult]) -> CheckStatus {
    results
        .iter()
        .fold(CheckStatus::Pass, |acc, r| acc.escalate(r.status))
}

#[must_use]
pub fn summarize(results: &[CheckResult]) -> String {
    let failed = results.iter().filter(|r| r.is_failed()).count();
    let warned = results.iter().filter(|r| r.is_warning()).count();
    match (failed, warned) {
        (0, 0) => format!(
            "All {} checks passed: no suspicious patterns found",
            results.len()
        ),
        (f, 0) => format!("{f} {} failed", plural_checks(f)),
        (0, w) => format!("{w} {} raised warnings", plural_checks(w)),
        (f, w) => format!("{f} {} failed, {w} raised warnings", plural_checks(f)),
    }
}

const fn plural_checks(n: usize) -> &'static str {
    if n == 1 { "check" } else { "checks" }
}
