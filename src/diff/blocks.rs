use crate::corpus::DiffRecord;

use super::patch::{PatchLine, patch_lines};

/// A maximal run of contiguous added lines from one patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub filename: String,
    pub commit_id: String,
    pub lines: Vec<String>,
}

impl Block {
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Group contiguous added lines of `patch` into runs of at least `min_lines`.
///
/// Any non-added line (context, removal, hunk or file header, unrecognized
/// text) ends the current run; a short run is discarded. Interleaved context
/// therefore splits one logical addition into separate runs.
#[must_use]
pub fn added_runs(patch: &str, min_lines: usize) -> Vec<Vec<&str>> {
    let mut runs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in patch_lines(patch) {
        if let PatchLine::Added(text) = line {
            current.push(text);
        } else {
            flush(&mut current, &mut runs, min_lines);
        }
    }
    flush(&mut current, &mut runs, min_lines);

    runs
}

fn flush<'a>(current: &mut Vec<&'a str>, runs: &mut Vec<Vec<&'a str>>, min_lines: usize) {
    if current.is_empty() {
        return;
    }
    let run = std::mem::take(current);
    if run.len() >= min_lines.max(1) {
        runs.push(run);
    }
}

/// Extract tagged [`Block`]s from a record's patch. A record without a patch yields none.
#[must_use]
pub fn extract_added_blocks(record: &DiffRecord, min_lines: usize) -> Vec<Block> {
    let Some(patch) = record.patch.as_deref() else {
        return Vec::new();
    };

    added_runs(patch, min_lines)
        .into_iter()
        .map(|run| Block {
            filename: record.filename.clone(),
            commit_id: record.commit_id.clone(),
            lines: run.into_iter().map(String::from).collect(),
        })
        .collect()
}
