use crate::config::Settings;
use crate::corpus::{Corpus, DiffRecord};
use crate::diff::{added_lines, removed_lines};
use crate::language::LanguageRegistry;

/// Read-only inputs shared by every check in one run.
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
    pub corpus: &'a Corpus,
    pub settings: &'a Settings,
    pub registry: &'a LanguageRegistry,
}

impl<'a> CheckContext<'a> {
    #[must_use]
    pub const fn new(
        corpus: &'a Corpus,
        settings: &'a Settings,
        registry: &'a LanguageRegistry,
    ) -> Self {
        Self {
            corpus,
            settings,
            registry,
        }
    }

    /// Trimmed, non-blank added lines classified as comments, with their record.
    pub fn added_comments(self) -> impl Iterator<Item = (&'a DiffRecord, &'a str)> + 'a {
        let registry = self.registry;
        let corpus = self.corpus;
        corpus.patched_records().flat_map(move |(record, patch)| {
            added_lines(patch)
                .map(str::trim)
                .filter(move |line| registry.is_comment(line, &record.filename))
                .map(move |line| (record, line))
        })
    }

    /// Trimmed removed lines classified as comments, with their record.
    pub fn removed_comments(self) -> impl Iterator<Item = (&'a DiffRecord, &'a str)> + 'a {
        let registry = self.registry;
        let corpus = self.corpus;
        corpus.patched_records().flat_map(move |(record, patch)| {
            removed_lines(patch)
                .map(str::trim)
                .filter(move |line| registry.is_comment(line, &record.filename))
                .map(move |line| (record, line))
        })
    }
}
