use std::fs;

use tempfile::TempDir;

use super::*;
use crate::cli::ConfigOutputFormat;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("provenance.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn validate_accepts_good_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[settings]\nmin_block_lines = 4\n");

    assert!(run_config_validate_impl(&path).is_ok());
}

#[test]
fn validate_rejects_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = run_config_validate_impl(&dir.path().join("nope.toml")).unwrap_err();

    assert!(err.to_string().contains("not found"));
}

#[test]
fn validate_rejects_out_of_range_setting() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[settings]\njaccard_threshold = 1.5\n");

    let err = run_config_validate_impl(&path).unwrap_err();

    assert!(matches!(err, ProvenanceError::InvalidSetting { .. }));
}

#[test]
fn validate_rejects_bad_toml() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[settings\n");

    let err = run_config_validate_impl(&path).unwrap_err();

    assert!(matches!(err, ProvenanceError::TomlParse(_)));
}

#[test]
fn show_text_lists_every_setting() {
    let text = format_config_text(&Config::default());

    for field in SETTING_FIELDS {
        assert!(text.contains(field), "missing {field}");
    }
    assert!(text.contains("max_commits = 300"));
    assert!(text.contains("max_details = 5"));
}

#[test]
fn show_text_includes_custom_languages() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "[languages.tex]\nextensions = [\"tex\"]\nline_comments = [\"%\"]\n",
    );

    let text = run_config_show_impl(Some(&path), ConfigOutputFormat::Text, false).unwrap();

    assert!(text.contains("[languages.tex]"));
    assert!(text.contains("line_comments = [\"%\"]"));
}

#[test]
fn show_json_round_trips_settings() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[settings]\nentropy_warn = 3.5\n");

    let json = run_config_show_impl(Some(&path), ConfigOutputFormat::Json, false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["settings"]["entropy_warn"], 3.5);
    assert_eq!(value["settings"]["min_block_lines"], 6);
}

#[test]
fn show_with_no_config_ignores_path() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[settings]\nmin_block_lines = 9\n");

    let text = run_config_show_impl(Some(&path), ConfigOutputFormat::Text, true).unwrap();

    assert!(text.contains("min_block_lines = 6"));
}
