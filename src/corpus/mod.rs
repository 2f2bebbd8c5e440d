mod builder;
mod model;
mod snapshot;

pub use builder::{CorpusBuilder, FileChange};
pub use model::{Commit, Corpus, DiffKey, DiffRecord, FileStatus, SHORT_ID_LEN};
pub use snapshot::{SnapshotCommit, SnapshotFile, load_snapshot, parse_snapshot};

#[cfg(test)]
#[path = "corpus_tests.rs"]
mod tests;

#[cfg(test)]
pub(crate) mod test_fixtures;
