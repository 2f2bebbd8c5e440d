use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use super::*;

struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    current_dir: PathBuf,
    config_dir: Option<PathBuf>,
}

impl MockFileSystem {
    fn new() -> Self {
        Self {
            files: HashMap::new(),
            current_dir: PathBuf::from("/project"),
            config_dir: Some(PathBuf::from("/home/user/.config/diff-provenance")),
        }
    }

    fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.current_dir.clone())
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone()
    }
}

#[test]
fn loader_returns_default_when_no_config() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let config = loader.load().unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn loader_prefers_local_config() {
    let fs = MockFileSystem::new()
        .with_file(
            "/project/.diff-provenance.toml",
            "[settings]\nmin_block_lines = 8\n",
        )
        .with_file(
            "/home/user/.config/diff-provenance/config.toml",
            "[settings]\nmin_block_lines = 3\n",
        );
    let config = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(config.settings.min_block_lines, 8);
}

#[test]
fn loader_falls_back_to_user_config() {
    let fs = MockFileSystem::new().with_file(
        "/home/user/.config/diff-provenance/config.toml",
        "[settings]\njaccard_threshold = 0.9\n",
    );
    let config = FileConfigLoader::with_fs(fs).load().unwrap();
    assert!((config.settings.jaccard_threshold - 0.9).abs() < f64::EPSILON);
    assert_eq!(config.settings.min_block_lines, 6);
}

#[test]
fn load_from_missing_path_is_file_read_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let result = loader.load_from_path(Path::new("/nope.toml"));
    assert!(matches!(result, Err(ProvenanceError::FileRead { .. })));
}

#[test]
fn parse_full_config() {
    let toml = r##"
[settings]
min_block_lines = 4
duplicate_threshold = 3
bigram_warn = 0.05
bigram_fail = 0.1
entropy_warn = 3.5
entropy_fail = 2.0
jaccard_threshold = 0.8

[corpus]
max_commits = 50
exclude = ["**/*.lock"]

[languages.elixir]
extensions = ["ex", "exs"]
line_comments = ["#"]

[output]
max_details = 10
"##;
    let config = FileConfigLoader::<RealFileSystem>::parse_config(toml).unwrap();
    assert_eq!(config.settings.duplicate_threshold, 3);
    assert_eq!(config.corpus.max_commits, 50);
    assert_eq!(config.corpus.exclude, vec!["**/*.lock"]);
    assert_eq!(config.languages["elixir"].extensions, vec!["ex", "exs"]);
    assert_eq!(config.output.max_details, 10);
}

#[test]
fn parse_rejects_out_of_range_setting() {
    let result =
        FileConfigLoader::<RealFileSystem>::parse_config("[settings]\nbigram_warn = 1.5\n");
    assert!(matches!(result, Err(ProvenanceError::InvalidSetting { .. })));
}

#[test]
fn parse_rejects_zero_block_lines() {
    let result =
        FileConfigLoader::<RealFileSystem>::parse_config("[settings]\nmin_block_lines = 0\n");
    assert!(matches!(result, Err(ProvenanceError::InvalidSetting { .. })));
}

#[test]
fn parse_rejects_invalid_exclude_glob() {
    let result =
        FileConfigLoader::<RealFileSystem>::parse_config("[corpus]\nexclude = [\"a[\"]\n");
    assert!(matches!(result, Err(ProvenanceError::InvalidPattern { .. })));
}

#[test]
fn parse_rejects_language_without_markers() {
    let result = FileConfigLoader::<RealFileSystem>::parse_config(
        "[languages.odd]\nextensions = [\"odd\"]\n",
    );
    assert!(matches!(result, Err(ProvenanceError::Config(_))));
}

#[test]
fn parse_rejects_malformed_toml() {
    let result = FileConfigLoader::<RealFileSystem>::parse_config("[settings\n");
    assert!(matches!(result, Err(ProvenanceError::TomlParse(_))));
}
