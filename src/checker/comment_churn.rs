use indexmap::IndexMap;

use super::{Check, CheckContext, CheckInfo, CheckResult, CheckStatus, MetricValue};

/// Comment deletions in one commit above which the commit is flagged.
const COMMIT_DELETION_LIMIT: usize = 5;
/// Share of flagged commits above which the check fails.
const FLAGGED_SHARE_FAIL: f64 = 0.30;
/// Total deletions above which the check warns even with no flagged commit.
const TOTAL_DELETION_WARN: usize = 20;

pub const INFO: CheckInfo = CheckInfo {
    id: "comment-churn",
    title: "Comment Churn",
    description: "Commits that delete many comment lines, a sign of generated comments being cleaned up",
};

#[derive(Debug, Default)]
pub struct CommentChurn;

impl Check for CommentChurn {
    #[allow(clippy::cast_precision_loss)]
    fn run(&self, ctx: &CheckContext<'_>) -> CheckResult {
        let mut per_commit: IndexMap<&str, usize> = IndexMap::new();
        for (record, _) in ctx.removed_comments() {
            *per_commit.entry(record.commit_id.as_str()).or_insert(0) += 1;
        }

        let mut result = CheckResult::new(&INFO);
        let mut total = 0;
        let mut flagged = 0;
        for commit in ctx.corpus.commits() {
            let deleted = per_commit.get(commit.id.as_str()).copied().unwrap_or(0);
            total += deleted;
            if deleted > COMMIT_DELETION_LIMIT {
                flagged += 1;
                result.push_detail(format!(
                    "{}: {deleted} comment lines removed ({})",
                    commit.short_id(),
                    commit.subject()
                ));
            }
        }

        let commits = ctx.corpus.commit_count();
        let average = if commits == 0 {
            0.0
        } else {
            total as f64 / commits as f64
        };
        result.set_metric("total_deletions", MetricValue::Count(total));
        result.set_metric("flagged_commits", MetricValue::Count(flagged));
        result.set_metric("avg_deletions_per_commit", MetricValue::Ratio(average));

        let status = if flagged as f64 > commits as f64 * FLAGGED_SHARE_FAIL {
            CheckStatus::Fail
        } else if flagged > 0 || total > TOTAL_DELETION_WARN {
            CheckStatus::Warning
        } else {
            CheckStatus::Pass
        };
        result.with_status(status)
    }

    fn info(&self) -> &'static CheckInfo {
        &INFO
    }
}
