use globset::{Glob, GlobSet, GlobSetBuilder};
use indexmap::{IndexMap, IndexSet};
use sha2::{Digest, Sha256};

use crate::error::{ProvenanceError, Result};

use super::model::{Commit, Corpus, DiffKey, DiffRecord, FileStatus};

/// One file change as handed over by the retrieval layer, before it is keyed
/// to its commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub filename: String,
    pub status: FileStatus,
    pub additions: usize,
    pub deletions: usize,
    pub patch: Option<String>,
}

/// Assembles a [`Corpus`] commit by commit.
#[derive(Debug, Default)]
pub struct CorpusBuilder {
    max_commits: Option<usize>,
    exclude: Option<GlobSet>,
    commits: Vec<Commit>,
    files: IndexSet<String>,
    records: IndexMap<DiffKey, DiffRecord>,
    excluded: usize,
    duplicates: usize,
}

impl CorpusBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop accepting commits once `limit` have been added.
    #[must_use]
    pub const fn max_commits(mut self, limit: usize) -> Self {
        self.max_commits = Some(limit);
        self
    }

    /// Leave out files whose name matches any of the glob `patterns`.
    ///
    /// # Errors
    /// Returns an error if a pattern is not a valid glob.
    pub fn exclude(mut self, patterns: &[String]) -> Result<Self> {
        if patterns.is_empty() {
            return Ok(self);
        }
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| ProvenanceError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let set = builder.build().map_err(|e| ProvenanceError::InvalidPattern {
            pattern: patterns.join(", "),
            source: e,
        })?;
        self.exclude = Some(set);
        Ok(self)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.max_commits
            .is_some_and(|limit| self.commits.len() >= limit)
    }

    /// Add a commit with its file changes. Returns `false` when the commit
    /// limit was already reached and the commit was ignored.
    pub fn push_commit(&mut self, commit: Commit, changes: Vec<FileChange>) -> bool {
        if self.is_full() {
            return false;
        }

        for change in changes {
            if self
                .exclude
                .as_ref()
                .is_some_and(|set| set.is_match(&change.filename))
            {
                self.excluded += 1;
                continue;
            }

            let key = DiffKey::new(&change.filename, &commit.id);
            if self.records.contains_key(&key) {
                log::warn!(
                    "duplicate diff record for {} in commit {}; keeping the first",
                    change.filename,
                    commit.short_id()
                );
                self.duplicates += 1;
                continue;
            }

            self.files.insert(change.filename.clone());
            self.records.insert(
                key,
                DiffRecord {
                    filename: change.filename,
                    commit_id: commit.id.clone(),
                    status: change.status,
                    additions: change.additions,
                    deletions: change.deletions,
                    patch: change.patch,
                },
            );
        }

        self.commits.push(commit);
        true
    }

    #[must_use]
    pub fn build(self) -> Corpus {
        if self.excluded > 0 || self.duplicates > 0 {
            log::debug!(
                "corpus built: {} excluded file change(s), {} duplicate record(s) dropped",
                self.excluded,
                self.duplicates
            );
        }
        let fingerprint = fingerprint(&self.commits, &self.records);
        Corpus {
            commits: self.commits,
            files: self.files,
            records: self.records,
            fingerprint,
        }
    }
}

fn fingerprint(commits: &[Commit], records: &IndexMap<DiffKey, DiffRecord>) -> String {
    let mut hasher = Sha256::new();
    for commit in commits {
        hasher.update(commit.id.as_bytes());
        hasher.update([0]);
    }
    for record in records.values() {
        hasher.update(record.commit_id.as_bytes());
        hasher.update([0]);
        hasher.update(record.filename.as_bytes());
        hasher.update([0]);
        if let Some(patch) = &record.patch {
            hasher.update(patch.as_bytes());
        }
        hasher.update([0]);
    }
    format!("{:x}", hasher.finalize())
}
