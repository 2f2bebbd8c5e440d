//! JSON snapshot of a commit history, as assembled by the retrieval layer.
//!
//! Field names follow the GitHub commit-detail API (`sha`, `files[].filename`,
//! `files[].patch`, ...). The top level is either a bare array of commits or an
//! object with a `commits` array.

use std::path::Path;

use serde::Deserialize;

use crate::error::{ProvenanceError, Result};

use super::builder::{CorpusBuilder, FileChange};
use super::model::{Commit, Corpus, FileStatus};

#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotCommit {
    pub sha: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub author: String,
    #[serde(default, alias = "timestamp")]
    pub date: String,
    #[serde(default)]
    pub files: Vec<SnapshotFile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotFile {
    pub filename: String,
    #[serde(default)]
    pub status: FileStatus,
    #[serde(default)]
    pub additions: usize,
    #[serde(default)]
    pub deletions: usize,
    #[serde(default)]
    pub patch: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SnapshotDocument {
    List(Vec<SnapshotCommit>),
    Wrapped { commits: Vec<SnapshotCommit> },
}

/// Parse snapshot JSON text.
///
/// # Errors
/// Returns an error if the text is not a valid snapshot document.
pub fn parse_snapshot(json: &str) -> Result<Vec<SnapshotCommit>> {
    let document: SnapshotDocument = serde_json::from_str(json)?;
    Ok(match document {
        SnapshotDocument::List(commits) | SnapshotDocument::Wrapped { commits } => commits,
    })
}

/// Read and parse a snapshot file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_snapshot(path: &Path) -> Result<Vec<SnapshotCommit>> {
    let content = std::fs::read_to_string(path).map_err(|e| ProvenanceError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_snapshot(&content)
}

impl From<SnapshotFile> for FileChange {
    fn from(file: SnapshotFile) -> Self {
        Self {
            filename: file.filename,
            status: file.status,
            additions: file.additions,
            deletions: file.deletions,
            patch: file.patch,
        }
    }
}

impl CorpusBuilder {
    /// Feed snapshot commits in order until the builder is full.
    #[must_use]
    pub fn with_snapshot(mut self, commits: Vec<SnapshotCommit>) -> Self {
        for entry in commits {
            let commit = Commit {
                id: entry.sha,
                message: entry.message,
                author: entry.author,
                timestamp: entry.date,
            };
            let changes = entry.files.into_iter().map(FileChange::from).collect();
            if !self.push_commit(commit, changes) {
                break;
            }
        }
        self
    }
}

impl Corpus {
    /// Build a corpus from snapshot commits with no limit or exclusions.
    #[must_use]
    pub fn from_snapshot(commits: Vec<SnapshotCommit>) -> Self {
        CorpusBuilder::new().with_snapshot(commits).build()
    }
}
