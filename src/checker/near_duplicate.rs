use std::collections::HashSet;

use indexmap::{IndexMap, IndexSet};

use crate::diff::added_runs;
use crate::text::{jaccard_sets, normalize, tokenize};

use super::{Check, CheckContext, CheckInfo, CheckResult, CheckStatus, MetricValue};

/// Minimum block length for this check, independent of `min_block_lines`.
pub const NEAR_DUPLICATE_MIN_LINES: usize = 4;
/// Blocks kept per file; bounds the pairwise comparison on long histories.
pub const MAX_BLOCKS_PER_FILE: usize = 40;
const MATCH_FAIL: usize = 5;

pub const INFO: CheckInfo = CheckInfo {
    id: "near-duplicate",
    title: "Cross-File Near Duplicates",
    description: "Added blocks in different files with highly similar token sets",
};

type TokenSet = HashSet<String>;

#[derive(Debug, Default)]
pub struct NearDuplicate;

/// Added blocks grouped by file, plus the files that hit the block cap.
#[derive(Debug, Default)]
struct FileBlocks<'a> {
    per_file: IndexMap<&'a str, Vec<TokenSet>>,
    capped: IndexSet<&'a str>,
}

impl NearDuplicate {
    /// Token sets of each file's added blocks, in first-seen file order.
    ///
    /// Once a file reaches the cap its later records are skipped unread.
    fn collect_blocks<'a>(ctx: &CheckContext<'a>) -> FileBlocks<'a> {
        let mut collected = FileBlocks::default();
        for (record, patch) in ctx.corpus.patched_records() {
            let filename = record.filename.as_str();
            if collected.capped.contains(filename) {
                continue;
            }
            let blocks = collected.per_file.entry(filename).or_default();
            for run in added_runs(patch, NEAR_DUPLICATE_MIN_LINES) {
                if blocks.len() >= MAX_BLOCKS_PER_FILE {
                    log::debug!("{filename}: block cap of {MAX_BLOCKS_PER_FILE} reached");
                    collected.capped.insert(filename);
                    break;
                }
                let normalized = normalize(&run.join("\n"));
                let tokens: TokenSet = tokenize(&normalized)
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                if !tokens.is_empty() {
                    blocks.push(tokens);
                }
            }
        }
        collected.per_file.retain(|_, blocks| !blocks.is_empty());
        collected
    }
}

impl Check for NearDuplicate {
    fn info(&self) -> &'static CheckInfo {
        &INFO
    }

    fn run(&self, ctx: &CheckContext<'_>) -> CheckResult {
        let collected = Self::collect_blocks(ctx);
        let files: Vec<(&str, &Vec<TokenSet>)> =
            collected.per_file.iter().map(|(name, blocks)| (*name, blocks)).collect();

        let mut result = CheckResult::new(&INFO);
        let mut comparisons = 0;
        let mut matches = 0;
        for (i, (file_a, blocks_a)) in files.iter().enumerate() {
            for (file_b, blocks_b) in &files[i + 1..] {
                for a in *blocks_a {
                    for b in *blocks_b {
                        comparisons += 1;
                        let similarity = jaccard_sets(a, b);
                        if similarity > ctx.settings.jaccard_threshold {
                            matches += 1;
                            result.push_detail(format!(
                                "{file_a} ~ {file_b}: {:.0}% similar blocks",
                                similarity * 100.0
                            ));
                        }
                    }
                }
            }
        }

        result.set_metric("files_compared", MetricValue::Count(files.len()));
        result.set_metric("block_pairs_compared", MetricValue::Count(comparisons));
        result.set_metric("matches", MetricValue::Count(matches));
        result.set_metric("capped_files", MetricValue::Count(collected.capped.len()));

        let status = if matches > MATCH_FAIL {
            CheckStatus::Fail
        } else if matches > 0 {
            CheckStatus::Warning
        } else {
            CheckStatus::Pass
        };
        result.with_status(status)
    }
}
