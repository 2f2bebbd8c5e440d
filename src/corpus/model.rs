use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Length of the abbreviated commit id used in evidence strings.
pub const SHORT_ID_LEN: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub id: String,
    pub message: String,
    pub author: String,
    pub timestamp: String,
}

impl Commit {
    #[must_use]
    pub fn short_id(&self) -> &str {
        self.id
            .char_indices()
            .nth(SHORT_ID_LEN)
            .map_or(self.id.as_str(), |(idx, _)| &self.id[..idx])
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("").trim()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Added,
    #[default]
    Modified,
    Removed,
    Renamed,
    /// GitHub reports `copied`, `changed` and `unchanged` too; they carry no
    /// extra meaning for the checks.
    #[serde(other)]
    Other,
}

/// Change of one file within one commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffRecord {
    pub filename: String,
    pub commit_id: String,
    pub status: FileStatus,
    pub additions: usize,
    pub deletions: usize,
    /// Absent for binary or oversized files.
    pub patch: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiffKey {
    pub filename: String,
    pub commit_id: String,
}

impl DiffKey {
    #[must_use]
    pub fn new(filename: &str, commit_id: &str) -> Self {
        Self {
            filename: filename.to_string(),
            commit_id: commit_id.to_string(),
        }
    }
}

/// Immutable snapshot of the commits, files and diffs analyzed in one run.
///
/// Records iterate in commit order, then in the order files appear within a
/// commit, so every check walks the history deterministically.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub(super) commits: Vec<Commit>,
    pub(super) files: IndexSet<String>,
    pub(super) records: IndexMap<DiffKey, DiffRecord>,
    pub(super) fingerprint: String,
}

impl Corpus {
    #[must_use]
    pub fn commits(&self) -> &[Commit] {
        &self.commits
    }

    /// Distinct filenames in first-seen order.
    #[must_use]
    pub const fn files(&self) -> &IndexSet<String> {
        &self.files
    }

    pub fn records(&self) -> impl Iterator<Item = &DiffRecord> {
        self.records.values()
    }

    #[must_use]
    pub fn record(&self, filename: &str, commit_id: &str) -> Option<&DiffRecord> {
        self.records.get(&DiffKey::new(filename, commit_id))
    }

    /// Records that actually carry patch text.
    pub fn patched_records(&self) -> impl Iterator<Item = (&DiffRecord, &str)> {
        self.records
            .values()
            .filter_map(|record| record.patch.as_deref().map(|patch| (record, patch)))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    #[must_use]
    pub fn commit_count(&self) -> usize {
        self.commits.len()
    }

    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Hex SHA-256 over commit ids, filenames and patch text.
    #[must_use]
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}
