use indexmap::IndexMap;

use crate::diff::added_lines;

use super::{Check, CheckContext, CheckInfo, CheckResult, CheckStatus, MetricValue};

/// Files with no more than this many added lines are never singled out.
const MIN_FILE_LINES: usize = 10;
const FILE_RATIO: f64 = 0.10;
// The fail ratio sits below the warning ratio, so the warning ratio only
// matters when no fail was raised. Kept as is.
const FAIL_RATIO: f64 = 0.10;
const WARN_RATIO: f64 = 0.50;

pub const INFO: CheckInfo = CheckInfo {
    id: "comment-density",
    title: "Comment Density",
    description: "Share of added lines that are comments, per file and overall",
};

#[derive(Debug, Default, Clone, Copy)]
struct LineTally {
    total: usize,
    comments: usize,
}

impl LineTally {
    #[allow(clippy::cast_precision_loss)]
    fn ratio(self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.comments as f64 / self.total as f64
        }
    }
}

#[derive(Debug, Default)]
pub struct CommentDensity;

impl Check for CommentDensity {
    fn info(&self) -> &'static CheckInfo {
        &INFO
    }

    fn run(&self, ctx: &CheckContext<'_>) -> CheckResult {
        let mut per_file: IndexMap<&str, LineTally> = IndexMap::new();
        for (record, patch) in ctx.corpus.patched_records() {
            let tally = per_file.entry(record.filename.as_str()).or_default();
            for line in added_lines(patch).map(str::trim).filter(|l| !l.is_empty()) {
                tally.total += 1;
                if ctx.registry.is_comment(line, &record.filename) {
                    tally.comments += 1;
                }
            }
        }

        let mut result = CheckResult::new(&INFO);
        let mut overall = LineTally::default();
        let mut suspicious = 0;
        for (filename, tally) in &per_file {
            overall.total += tally.total;
            overall.comments += tally.comments;
            if tally.total > MIN_FILE_LINES && tally.ratio() > FILE_RATIO {
                suspicious += 1;
                result.push_detail(format!(
                    "{filename}: {:.1}% comments ({}/{} added lines)",
                    tally.ratio() * 100.0,
                    tally.comments,
                    tally.total
                ));
            }
        }

        let ratio = overall.ratio();
        result.set_metric("total_lines", MetricValue::Count(overall.total));
        result.set_metric("comment_lines", MetricValue::Count(overall.comments));
        result.set_metric("comment_ratio", MetricValue::Ratio(ratio));
        result.set_metric("suspicious_files", MetricValue::Count(suspicious));

        let status = if ratio > FAIL_RATIO {
            CheckStatus::Fail
        } else if ratio > WARN_RATIO || suspicious > 0 {
            CheckStatus::Warning
        } else {
            CheckStatus::Pass
        };
        result.with_status(status)
    }
}
