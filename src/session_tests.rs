use super::*;
use crate::corpus::test_fixtures::{added_patch, change, commit, corpus};

fn sample_corpus(id: &str) -> Corpus {
    corpus(vec![(
        commit(id, "Add module"),
        vec![change("lib.rs", &added_patch(&["fn a() {}", "fn b() {}"]))],
    )])
}

#[test]
fn begin_run_without_corpus_is_no_data() {
    let mut session = AnalysisSession::default();

    assert!(matches!(session.begin_run(), Err(ProvenanceError::NoData)));
}

#[test]
fn begin_run_on_empty_corpus_is_no_data() {
    let mut session = AnalysisSession::default();
    session.load(corpus(vec![]));

    assert!(matches!(session.begin_run(), Err(ProvenanceError::NoData)));
}

#[test]
fn completed_run_is_accepted() {
    let mut session = AnalysisSession::default();
    session.load(sample_corpus("c1"));

    let handle = session.begin_run().unwrap();
    let run = handle.execute(&Engine::default()).unwrap();
    let report = session.accept(run).unwrap();

    assert_eq!(report.commits_analyzed, 1);
}

#[test]
fn settings_edit_after_begin_does_not_reach_run() {
    let mut session = AnalysisSession::default();
    session.load(sample_corpus("c1"));

    let handle = session.begin_run().unwrap();
    session.settings_mut().set("jaccardThreshold", "0.2").unwrap();
    let run = handle.execute(&Engine::default()).unwrap();

    assert_eq!(run.report().settings, Settings::default());
    assert!((session.settings().snapshot().jaccard_threshold - 0.2).abs() < f64::EPSILON);
}

#[test]
fn reload_discards_stale_result() {
    let mut session = AnalysisSession::default();
    session.load(sample_corpus("c1"));
    let handle = session.begin_run().unwrap();
    let engine = Engine::default();

    // Simulate a run that finished just before the reload was observed.
    let finished = handle.execute(&engine).unwrap();
    session.load(sample_corpus("c2"));

    assert!(session.accept(finished).is_none());
    assert_eq!(session.generation(), 2);
}

#[test]
fn reload_cancels_in_flight_run() {
    let mut session = AnalysisSession::default();
    session.load(sample_corpus("c1"));
    let handle = session.begin_run().unwrap();

    session.load(sample_corpus("c2"));

    assert!(handle.token().is_cancelled());
    let err = handle.execute(&Engine::default()).unwrap_err();
    assert!(matches!(err, ProvenanceError::Cancelled));
}

#[test]
fn new_run_cancels_previous_one() {
    let mut session = AnalysisSession::default();
    session.load(sample_corpus("c1"));

    let first = session.begin_run().unwrap();
    let second = session.begin_run().unwrap();

    assert!(first.token().is_cancelled());
    assert!(!second.token().is_cancelled());
    assert_eq!(first.generation(), second.generation());
}

#[test]
fn run_captures_corpus_at_start() {
    let mut session = AnalysisSession::default();
    session.load(sample_corpus("c1"));
    let handle = session.begin_run().unwrap();
    let fingerprint = session.corpus().map(|c| c.fingerprint().to_string());

    session.load(sample_corpus("c2"));

    assert_ne!(session.corpus().map(|c| c.fingerprint().to_string()), fingerprint);
    assert_eq!(handle.settings(), &Settings::default());
}
