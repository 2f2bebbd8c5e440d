use super::*;
use crate::checker::CheckStatus;
use crate::config::CustomLanguageConfig;
use crate::corpus::test_fixtures::{added_patch, change, commit, corpus};

const EIGHT_LINES: [&str; 8] = [
    "pub fn handler(req: Request) -> Response {",
    "    let body = req.body();",
    "    let parsed = parse(body);",
    "    let validated = validate(parsed);",
    "    let stored = store(validated);",
    "    let reply = render(stored);",
    "    Response::ok(reply)",
    "}",
];

#[test]
fn shared_block_in_two_files_warns_boilerplate() {
    let patch = added_patch(&EIGHT_LINES);
    let c = corpus(vec![(
        commit("c1", "Add handlers"),
        vec![change("api/users.rs", &patch), change("api/orders.rs", &patch)],
    )]);

    let report = Engine::default().analyze(&c, Settings::default()).unwrap();

    let boilerplate = report.result("boilerplate").unwrap();
    assert_eq!(boilerplate.status, CheckStatus::Warning);
    assert_eq!(boilerplate.details.len(), 1);
    assert!(boilerplate.details[0].contains("api/users.rs"));
    assert!(boilerplate.details[0].contains("api/orders.rs"));
    assert!(boilerplate.details[0].contains("2 occurrences"));
    assert_eq!(report.commits_analyzed, 1);
    assert_eq!(report.files_analyzed, 2);
    assert_eq!(report.results.len(), 6);
}

#[test]
fn empty_corpus_is_no_data() {
    let c = corpus(vec![]);

    let err = Engine::default().analyze(&c, Settings::default()).unwrap_err();

    assert!(matches!(err, ProvenanceError::NoData));
    assert_eq!(err.error_type(), "NoData");
}

#[test]
fn overall_matches_worst_check() {
    let patch = added_patch(&EIGHT_LINES);
    let c = corpus(vec![(
        commit("c1", "Add handlers"),
        vec![change("a.rs", &patch), change("b.rs", &patch)],
    )]);

    let report = Engine::default().analyze(&c, Settings::default()).unwrap();

    let worst = report.results.iter().map(|r| r.status).max().unwrap();
    assert_eq!(report.overall, worst);
}

#[test]
fn report_records_settings_used() {
    let c = corpus(vec![(commit("c1", "x"), vec![change("a.rs", &added_patch(&["a"]))])]);
    let settings = Settings {
        jaccard_threshold: 0.5,
        ..Settings::default()
    };

    let report = Engine::default().analyze(&c, settings).unwrap();

    assert_eq!(report.settings, settings);
}

#[test]
fn custom_language_changes_comment_classification() {
    let lines = ["% note one", "% note two", "% note three", "% note four", "% note five", "% six"];
    let c = corpus(vec![(
        commit("c1", "tex"),
        vec![change("paper.tex", &added_patch(&lines))],
    )]);
    let mut config = Config::default();
    config.languages.insert(
        "TeX".to_string(),
        CustomLanguageConfig {
            extensions: vec!["tex".to_string()],
            line_comments: vec!["%".to_string()],
            ..CustomLanguageConfig::default()
        },
    );

    let plain = Engine::default().analyze(&c, Settings::default()).unwrap();
    let custom = Engine::from_config(&config, Schedule::Sequential)
        .analyze(&c, Settings::default())
        .unwrap();

    let comment_lines = |r: &AnalysisReport| {
        r.result("comment-density")
            .and_then(|d| d.metric("comment_lines"))
            .cloned()
    };
    assert_eq!(
        comment_lines(&plain),
        Some(crate::checker::MetricValue::Count(0))
    );
    assert_eq!(
        comment_lines(&custom),
        Some(crate::checker::MetricValue::Count(6))
    );
}
