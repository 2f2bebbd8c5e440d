use crate::checker::{AnalysisReport, Schedule};
use crate::cli::{AnalyzeArgs, Cli};
use crate::config::{Config, SettingsStore};
use crate::corpus::{Corpus, CorpusBuilder, load_snapshot};
use crate::engine::Engine;
use crate::output::{
    CheckProgress, JsonFormatter, MarkdownFormatter, OutputFormat, ReportFormatter, TextFormatter,
    print_error,
};
use crate::session::AnalysisSession;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, ProvenanceError, Result, exit_code_for};

use super::context::{color_choice_to_mode, load_config, write_output};

#[must_use]
pub fn run_analyze(args: &AnalyzeArgs, cli: &Cli) -> i32 {
    match run_analyze_impl(args, cli) {
        Ok(exit_code) => exit_code,
        // Nothing to analyze is a notice, not a failure.
        Err(ProvenanceError::NoData) => {
            if !cli.quiet {
                print_error(&ProvenanceError::NoData);
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Load, analyze and render one snapshot.
///
/// # Errors
/// Returns an error for an unreadable or invalid configuration or snapshot,
/// and `ProvenanceError::NoData` when the snapshot has no commits.
pub fn run_analyze_impl(args: &AnalyzeArgs, cli: &Cli) -> Result<i32> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;

    let mut settings = SettingsStore::new(config.settings);
    for assignment in &args.set {
        // A rejected override keeps the previous value; the store logs why.
        if settings.apply_assignment(assignment).is_ok() {
            log::debug!("applied setting override {assignment}");
        }
    }

    let corpus = build_corpus(args, &config)?;
    let schedule = if args.sequential {
        Schedule::Sequential
    } else {
        Schedule::Parallel
    };
    let engine = Engine::from_config(&config, schedule);

    let report = execute(&engine, settings, corpus, cli.quiet)?;
    let rendered = render(&report, args, cli, &config)?;
    write_output(args.output.as_deref(), &rendered, cli.quiet)?;

    Ok(exit_code_for(report.overall, args.strict))
}

/// Read the snapshot into a corpus bounded by the commit limit and excludes.
///
/// # Errors
/// Returns an error if the snapshot cannot be read or a pattern is invalid.
pub fn build_corpus(args: &AnalyzeArgs, config: &Config) -> Result<Corpus> {
    let max_commits = args.max_commits.unwrap_or(config.corpus.max_commits);
    if max_commits == 0 {
        return Err(ProvenanceError::invalid_setting(
            "max_commits",
            "0",
            "must be at least 1",
        ));
    }

    let mut exclude = config.corpus.exclude.clone();
    exclude.extend(args.exclude.iter().cloned());

    let commits = load_snapshot(&args.snapshot)?;
    log::debug!(
        "snapshot {} holds {} commit(s)",
        args.snapshot.display(),
        commits.len()
    );

    Ok(CorpusBuilder::new()
        .max_commits(max_commits)
        .exclude(&exclude)?
        .with_snapshot(commits)
        .build())
}

fn execute(
    engine: &Engine,
    settings: SettingsStore,
    corpus: Corpus,
    quiet: bool,
) -> Result<AnalysisReport> {
    let mut session = AnalysisSession::new(settings);
    session.load(corpus);
    let handle = session.begin_run()?;

    let total = u64::try_from(engine.runner().len()).unwrap_or(u64::MAX);
    let progress = CheckProgress::new(total, quiet);
    let outcome = handle.execute_with(engine, |result| progress.check_done(result));
    progress.finish();

    session.accept(outcome?).ok_or(ProvenanceError::Cancelled)
}

fn render(report: &AnalysisReport, args: &AnalyzeArgs, cli: &Cli, config: &Config) -> Result<String> {
    let max_details = args.max_details.unwrap_or(config.output.max_details);
    match args.format {
        OutputFormat::Text => TextFormatter::with_verbose(color_choice_to_mode(cli.color), cli.verbose)
            .with_max_details(max_details)
            .format(report),
        OutputFormat::Json => JsonFormatter.format(report),
        OutputFormat::Markdown => MarkdownFormatter::new()
            .with_max_details(max_details)
            .format(report),
    }
}

#[cfg(test)]
#[path = "analyze_tests.rs"]
mod tests;
