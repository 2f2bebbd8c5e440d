use std::str::FromStr;

use super::*;

fn details(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("detail {i}")).collect()
}

#[test]
fn output_format_from_str() {
    assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
    assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
    assert_eq!(OutputFormat::from_str("md").unwrap(), OutputFormat::Markdown);
    assert_eq!(OutputFormat::from_str("markdown").unwrap(), OutputFormat::Markdown);
    assert!(OutputFormat::from_str("sarif").is_err());
}

#[test]
fn truncate_keeps_short_lists() {
    assert_eq!(truncate_details(&details(5), 5), details(5));
    assert!(truncate_details(&[], 5).is_empty());
}

#[test]
fn truncate_summarizes_overflow() {
    let shown = truncate_details(&details(8), 5);

    assert_eq!(shown.len(), 6);
    assert_eq!(shown[4], "detail 4");
    assert_eq!(shown[5], "… and 3 more");
}

#[test]
fn truncate_zero_cap_shows_all() {
    assert_eq!(truncate_details(&details(12), 0).len(), 12);
}
