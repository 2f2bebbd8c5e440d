use indexmap::{IndexMap, IndexSet};

use crate::diff::extract_added_blocks;
use crate::text::normalize;

use super::{Check, CheckContext, CheckInfo, CheckResult, CheckStatus, MetricValue};

/// Files listed per detail before the rest is summarized as a count.
const FILES_SHOWN: usize = 5;
/// Duplicate groups above which the check fails.
const GROUP_FAIL: usize = 5;

pub const INFO: CheckInfo = CheckInfo {
    id: "boilerplate",
    title: "Repeated Boilerplate",
    description: "Identical added blocks repeated across several files",
};

#[derive(Debug, Default)]
struct BlockGroup<'a> {
    occurrences: usize,
    lines: usize,
    files: IndexSet<&'a str>,
}

#[derive(Debug, Default)]
pub struct Boilerplate;

impl Boilerplate {
    fn describe(group: &BlockGroup<'_>) -> String {
        let shown: Vec<&str> = group.files.iter().take(FILES_SHOWN).copied().collect();
        let hidden = group.files.len().saturating_sub(FILES_SHOWN);
        let more = if hidden > 0 {
            format!(" (+{hidden} more)")
        } else {
            String::new()
        };
        format!(
            "Block of {} lines repeated in {} files ({}{more}): {} occurrences",
            group.lines,
            group.files.len(),
            shown.join(", "),
            group.occurrences
        )
    }
}

impl Check for Boilerplate {
    fn info(&self) -> &'static CheckInfo {
        &INFO
    }

    fn run(&self, ctx: &CheckContext<'_>) -> CheckResult {
        let min_lines = ctx.settings.min_block_lines;
        let mut groups: IndexMap<String, BlockGroup<'_>> = IndexMap::new();

        for record in ctx.corpus.records() {
            for block in extract_added_blocks(record, min_lines) {
                let key = normalize(&block.text());
                if key.is_empty() {
                    continue;
                }
                let group = groups.entry(key).or_default();
                group.occurrences += 1;
                group.lines = block.line_count();
                group.files.insert(record.filename.as_str());
            }
        }

        let mut result = CheckResult::new(&INFO);
        let mut duplicates = 0;
        for group in groups.values() {
            if group.occurrences >= ctx.settings.duplicate_threshold && group.files.len() >= 2 {
                duplicates += 1;
                result.push_detail(Self::describe(group));
            }
        }

        result.set_metric("unique_blocks", MetricValue::Count(groups.len()));
        result.set_metric("duplicate_groups", MetricValue::Count(duplicates));

        let status = if duplicates > GROUP_FAIL {
            CheckStatus::Fail
        } else if duplicates > 0 {
            CheckStatus::Warning
        } else {
            CheckStatus::Pass
        };
        result.with_status(status)
    }
}
