//! Shared corpus fixtures for checker and session tests.

use std::fmt::Write;

use super::{Commit, Corpus, CorpusBuilder, FileChange, FileStatus};

pub fn commit(id: &str, message: &str) -> Commit {
    Commit {
        id: id.to_string(),
        message: message.to_string(),
        author: "Dev".to_string(),
        timestamp: "2024-01-01T00:00:00Z".to_string(),
    }
}

pub fn change(filename: &str, patch: &str) -> FileChange {
    FileChange {
        filename: filename.to_string(),
        status: FileStatus::Modified,
        additions: patch.lines().filter(|l| l.starts_with('+')).count(),
        deletions: patch.lines().filter(|l| l.starts_with('-')).count(),
        patch: Some(patch.to_string()),
    }
}

pub fn binary_change(filename: &str) -> FileChange {
    FileChange {
        filename: filename.to_string(),
        status: FileStatus::Added,
        additions: 0,
        deletions: 0,
        patch: None,
    }
}

/// Patch with one hunk header followed by every line of `lines` as an addition.
pub fn added_patch(lines: &[&str]) -> String {
    let mut patch = format!("@@ -0,0 +1,{} @@\n", lines.len());
    for line in lines {
        let _ = writeln!(patch, "+{line}");
    }
    patch
}

/// Patch with one hunk header followed by every line of `lines` as a removal.
pub fn removed_patch(lines: &[&str]) -> String {
    let mut patch = format!("@@ -1,{} +0,0 @@\n", lines.len());
    for line in lines {
        let _ = writeln!(patch, "-{line}");
    }
    patch
}

pub fn corpus(entries: Vec<(Commit, Vec<FileChange>)>) -> Corpus {
    let mut builder = CorpusBuilder::new();
    for (commit, changes) in entries {
        builder.push_commit(commit, changes);
    }
    builder.build()
}
