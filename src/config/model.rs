use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::settings::Settings;

/// Default number of commits taken from a snapshot.
pub const DEFAULT_MAX_COMMITS: usize = 300;

/// Default number of details shown per check by the text and Markdown reports.
pub const DEFAULT_MAX_DETAILS: usize = 5;

/// Which part of the history is analyzed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorpusConfig {
    /// Upper bound on commits read from the snapshot (newest first, as delivered).
    #[serde(default = "default_max_commits")]
    pub max_commits: usize,

    /// Glob patterns for files left out of every check (lockfiles, vendored code).
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            max_commits: default_max_commits(),
            exclude: Vec::new(),
        }
    }
}

/// Comment syntax for a language missing from, or overriding, the built-in table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomLanguageConfig {
    pub extensions: Vec<String>,

    #[serde(default)]
    pub line_comments: Vec<String>,

    #[serde(default)]
    pub block_comments: Vec<(String, String)>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continuation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Details listed per check before collapsing into "... and N more".
    #[serde(default = "default_max_details")]
    pub max_details: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            max_details: default_max_details(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,

    #[serde(default)]
    pub corpus: CorpusConfig,

    #[serde(default)]
    pub languages: IndexMap<String, CustomLanguageConfig>,

    #[serde(default)]
    pub output: OutputConfig,
}

const fn default_max_commits() -> usize {
    DEFAULT_MAX_COMMITS
}

const fn default_max_details() -> usize {
    DEFAULT_MAX_DETAILS
}
