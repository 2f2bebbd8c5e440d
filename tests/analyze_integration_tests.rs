//! Integration tests for the `analyze` command.

mod common;

use common::{TestFixture, clean_snapshot, comment_heavy_snapshot};
use predicates::prelude::*;
use serde_json::{Value, json};

fn check<'a>(report: &'a Value, id: &str) -> &'a Value {
    report["checks"]
        .as_array()
        .expect("checks array")
        .iter()
        .find(|c| c["id"] == id)
        .unwrap_or_else(|| panic!("missing check {id}"))
}

// =============================================================================
// Exit Codes
// =============================================================================

#[test]
fn clean_history_passes() {
    let fixture = TestFixture::new();
    let snapshot = fixture.create_snapshot(&clean_snapshot());

    diff_provenance!()
        .args(["--no-config", "--color", "never", "analyze", &snapshot])
        .assert()
        .success()
        .stdout(predicate::str::contains("Diff provenance: 1 commit(s), 1 file(s)"))
        .stdout(predicate::str::contains(
            "Overall: PASS - All 6 checks passed: no suspicious patterns found",
        ));
}

#[test]
fn comment_heavy_history_fails() {
    let fixture = TestFixture::new();
    let snapshot = fixture.create_snapshot(&comment_heavy_snapshot());

    diff_provenance!()
        .args(["--no-config", "--color", "never", "analyze", &snapshot])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("FAIL: Comment Density"))
        .stdout(predicate::str::contains("src/steps.rs: 100.0% comments (20/20 added lines)"));
}

#[test]
fn strict_mode_turns_warnings_into_failure() {
    let fixture = TestFixture::new();
    let block = common::added_patch(&[
        "fn handler() {",
        "    let a = load();",
        "    let b = parse(a);",
        "    let c = check(b);",
        "    let d = store(c);",
        "    e",
        "}",
    ]);
    let snapshot = fixture.create_snapshot(&json!([common::commit(
        "ccccccc333",
        common::QUIET_MESSAGE,
        vec![common::file("a.rs", &block), common::file("b.rs", &block)],
    )]));

    let output = diff_provenance!()
        .args(["--no-config", "analyze", &snapshot, "--format", "json"])
        .output()
        .unwrap();
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(check(&report, "boilerplate")["status"], "warning");
    assert_eq!(report["overall"], "warning");
    assert_eq!(output.status.code(), Some(0));

    diff_provenance!()
        .args(["--no-config", "analyze", &snapshot, "--strict"])
        .assert()
        .code(1);
}

#[test]
fn empty_snapshot_reports_no_data_and_succeeds() {
    let fixture = TestFixture::new();
    let snapshot = fixture.create_snapshot(&json!([]));

    diff_provenance!()
        .args(["--no-config", "analyze", &snapshot])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No commits to analyze"));
}

#[test]
fn invalid_setting_override_keeps_default() {
    let fixture = TestFixture::new();
    let snapshot = fixture.create_snapshot(&clean_snapshot());

    let output = diff_provenance!()
        .args(["--no-config", "analyze", &snapshot, "--set", "jaccardThreshold=1.5", "-f", "json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("keeping previous value"), "stderr: {stderr}");
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["settings"]["jaccard_threshold"], 0.75);
}

#[test]
fn malformed_snapshot_is_config_error() {
    let fixture = TestFixture::new();
    let path = fixture.create_file("snapshot.json", "{ not json");

    diff_provenance!()
        .args(["--no-config", "analyze", path.to_str().unwrap()])
        .assert()
        .code(2);
}

#[test]
fn missing_snapshot_is_config_error() {
    let fixture = TestFixture::new();

    diff_provenance!()
        .current_dir(fixture.path())
        .args(["--no-config", "analyze", "nope.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("nope.json"));
}

// =============================================================================
// Output Formats
// =============================================================================

#[test]
fn json_output_lists_all_checks_in_order() {
    let fixture = TestFixture::new();
    let snapshot = fixture.create_snapshot(&comment_heavy_snapshot());

    let output = diff_provenance!()
        .args(["--no-config", "analyze", &snapshot, "-f", "json"])
        .output()
        .unwrap();
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();

    let ids: Vec<&str> = report["checks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        ids,
        [
            "comment-density",
            "comment-churn",
            "boilerplate",
            "repetitive-phrasing",
            "comment-entropy",
            "near-duplicate",
        ]
    );
    assert_eq!(report["overall"], "fail");
    assert_eq!(check(&report, "comment-density")["metrics"]["comment_lines"], 20);
    assert_eq!(report["summary"]["commits_analyzed"], 1);
    assert_eq!(report["settings"]["min_block_lines"], 6);
}

#[test]
fn markdown_output_has_tables() {
    let fixture = TestFixture::new();
    let snapshot = fixture.create_snapshot(&comment_heavy_snapshot());

    diff_provenance!()
        .args(["--no-config", "analyze", &snapshot, "--format", "markdown"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("## Diff Provenance Report"))
        .stdout(predicate::str::contains("| Status | Check | Findings |"))
        .stdout(predicate::str::contains("#### Comment Density"));
}

#[test]
fn output_file_receives_report() {
    let fixture = TestFixture::new();
    let snapshot = fixture.create_snapshot(&clean_snapshot());
    let out = fixture.path().join("report.json");

    diff_provenance!()
        .args(["--no-config", "-q", "analyze", &snapshot, "-f", "json", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let report: Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(report["overall"], "pass");
}

#[test]
fn sequential_and_parallel_reports_match() {
    let fixture = TestFixture::new();
    let snapshot = fixture.create_snapshot(&comment_heavy_snapshot());

    let run = |extra: &[&str]| {
        let mut cmd = diff_provenance!();
        cmd.args(["--no-config", "analyze", &snapshot, "-f", "json"]).args(extra);
        cmd.output().unwrap().stdout
    };

    assert_eq!(run(&[]), run(&["--sequential"]));
}

// =============================================================================
// Corpus Shaping
// =============================================================================

#[test]
fn exclude_pattern_removes_files() {
    let fixture = TestFixture::new();
    let snapshot = fixture.create_snapshot(&comment_heavy_snapshot());

    diff_provenance!()
        .args(["--no-config", "analyze", &snapshot, "-x", "src/**", "-f", "json"])
        .assert()
        .stdout(predicate::str::contains("\"files_analyzed\": 0"));
}

#[test]
fn config_file_settings_are_used() {
    let fixture = TestFixture::new();
    let snapshot = fixture.create_snapshot(&clean_snapshot());
    fixture.create_config("[settings]\nmin_block_lines = 9\n\n[corpus]\nmax_commits = 10\n");

    let output = diff_provenance!()
        .current_dir(fixture.path())
        .args(["analyze", &snapshot, "-f", "json"])
        .output()
        .unwrap();
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(report["settings"]["min_block_lines"], 9);
}

#[test]
fn no_config_ignores_local_file() {
    let fixture = TestFixture::new();
    let snapshot = fixture.create_snapshot(&clean_snapshot());
    fixture.create_config("[settings]\nmin_block_lines = 9\n");

    let output = diff_provenance!()
        .current_dir(fixture.path())
        .args(["--no-config", "analyze", &snapshot, "-f", "json"])
        .output()
        .unwrap();
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(report["settings"]["min_block_lines"], 6);
}
