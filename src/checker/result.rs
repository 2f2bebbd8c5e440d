use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::text::RankedGram;

/// Outcome of one check. Ordering follows precedence: `Fail > Warning > Pass`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    #[default]
    Pass,
    Warning,
    Fail,
}

impl CheckStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Warning => "warning",
            Self::Fail => "fail",
        }
    }

    /// Raise to `other` if it takes precedence.
    #[must_use]
    pub fn escalate(self, other: Self) -> Self {
        self.max(other)
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Count(usize),
    Ratio(f64),
    Ranking(Vec<RankedGram>),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Ratio(r) => write!(f, "{r:.4}"),
            Self::Ranking(grams) => {
                let parts: Vec<String> = grams
                    .iter()
                    .map(|g| format!("\"{}\" ×{}", g.gram, g.count))
                    .collect();
                f.write_str(&parts.join(", "))
            }
        }
    }
}

/// Static identity of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckInfo {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Result of one check over the whole corpus.
///
/// `details` is the full evidence list in discovery order; truncation for
/// display happens in the output layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: CheckStatus,
    pub details: Vec<String>,
    pub metrics: IndexMap<String, MetricValue>,
}

impl CheckResult {
    #[must_use]
    pub fn new(info: &CheckInfo) -> Self {
        Self {
            id: info.id.to_string(),
            title: info.title.to_string(),
            description: info.description.to_string(),
            status: CheckStatus::Pass,
            details: Vec::new(),
            metrics: IndexMap::new(),
        }
    }

    /// A `pass` placeholder for a check whose computation aborted.
    #[must_use]
    pub fn degraded(info: &CheckInfo, reason: &str) -> Self {
        let mut result = Self::new(info);
        result
            .details
            .push(format!("Check could not complete: {reason}"));
        result
    }

    #[must_use]
    pub const fn with_status(mut self, status: CheckStatus) -> Self {
        self.status = status;
        self
    }

    pub fn push_detail(&mut self, detail: impl Into<String>) {
        self.details.push(detail.into());
    }

    pub fn set_metric(&mut self, name: &str, value: MetricValue) {
        self.metrics.insert(name.to_string(), value);
    }

    #[must_use]
    pub fn metric(&self, name: &str) -> Option<&MetricValue> {
        self.metrics.get(name)
    }

    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self.status, CheckStatus::Pass)
    }

    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self.status, CheckStatus::Warning)
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.status, CheckStatus::Fail)
    }
}
