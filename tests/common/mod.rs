#![allow(dead_code)]

use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the diff-provenance binary.
#[macro_export]
macro_rules! diff_provenance {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("diff-provenance"))
    };
}

pub const QUIET_MESSAGE: &str = "Rework the cache eviction path so that stale entries are dropped \
    before the writer thread flushes pages to disk, which avoids a deadlock seen under heavy load \
    when two readers race on one bucket and both attempt promotion into hot tier storage";

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Creates a `.diff-provenance.toml` in the temp directory.
    pub fn create_config(&self, content: &str) -> PathBuf {
        self.create_file(".diff-provenance.toml", content)
    }

    /// Writes a snapshot document and returns its path as a string.
    pub fn create_snapshot(&self, snapshot: &Value) -> String {
        let path = self.create_file(
            "snapshot.json",
            &serde_json::to_string_pretty(snapshot).expect("Failed to serialize snapshot"),
        );
        path.to_str().expect("temp path is UTF-8").to_string()
    }
}

/// Unified diff adding `lines` after an empty hunk header.
pub fn added_patch(lines: &[&str]) -> String {
    let mut patch = format!("@@ -0,0 +1,{} @@\n", lines.len());
    for line in lines {
        let _ = writeln!(patch, "+{line}");
    }
    patch
}

pub fn file(filename: &str, patch: &str) -> Value {
    json!({ "filename": filename, "status": "modified", "patch": patch })
}

pub fn commit(sha: &str, message: &str, files: Vec<Value>) -> Value {
    json!({
        "sha": sha,
        "message": message,
        "author": "Dev",
        "date": "2024-03-01T12:00:00Z",
        "files": files,
    })
}

/// One commit whose only signals stay below every threshold.
pub fn clean_snapshot() -> Value {
    let patch = added_patch(&["let total = items.len();", "flush(total);"]);
    json!([commit("aaaaaaa111", QUIET_MESSAGE, vec![file("src/cache.rs", &patch)])])
}

/// Every added line is a comment, which fails comment density.
pub fn comment_heavy_snapshot() -> Value {
    let comments: Vec<String> = (0..20).map(|i| format!("// explain step {i}")).collect();
    let lines: Vec<&str> = comments.iter().map(String::as_str).collect();
    let patch = added_patch(&lines);
    json!([commit("bbbbbbb222", QUIET_MESSAGE, vec![file("src/steps.rs", &patch)])])
}
