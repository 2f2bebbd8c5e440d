use crate::checker::{
    AnalysisReport, CancellationToken, CheckContext, CheckResult, CheckRunner, Schedule,
};
use crate::config::{Config, Settings};
use crate::corpus::Corpus;
use crate::error::{ProvenanceError, Result};
use crate::language::LanguageRegistry;

/// Runs the provenance checks over a corpus.
///
/// The engine holds no per-run state; every call receives its corpus and a
/// settings value, so one engine can serve any number of runs.
pub struct Engine {
    registry: LanguageRegistry,
    runner: CheckRunner,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(LanguageRegistry::default(), CheckRunner::default())
    }
}

impl Engine {
    #[must_use]
    pub const fn new(registry: LanguageRegistry, runner: CheckRunner) -> Self {
        Self { registry, runner }
    }

    /// Engine with the built-in language table extended by `config.languages`.
    #[must_use]
    pub fn from_config(config: &Config, schedule: Schedule) -> Self {
        Self::new(
            LanguageRegistry::with_custom_languages(&config.languages),
            CheckRunner::default().with_schedule(schedule),
        )
    }

    #[must_use]
    pub const fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    #[must_use]
    pub const fn runner(&self) -> &CheckRunner {
        &self.runner
    }

    /// Analyze `corpus` to completion.
    ///
    /// # Errors
    /// Returns `ProvenanceError::NoData` when the corpus has no commits.
    pub fn analyze(&self, corpus: &Corpus, settings: Settings) -> Result<AnalysisReport> {
        self.analyze_with(corpus, settings, &CancellationToken::new(), |_| {})
    }

    /// Analyze `corpus`, honoring `token` and reporting each finished check.
    ///
    /// # Errors
    /// Returns `ProvenanceError::NoData` for an empty corpus and
    /// `ProvenanceError::Cancelled` when the token is set mid-run.
    pub fn analyze_with<F>(
        &self,
        corpus: &Corpus,
        settings: Settings,
        token: &CancellationToken,
        on_done: F,
    ) -> Result<AnalysisReport>
    where
        F: Fn(&CheckResult) + Sync,
    {
        if corpus.is_empty() {
            return Err(ProvenanceError::NoData);
        }
        log::info!(
            "analyzing {} commit(s) across {} file(s)",
            corpus.commit_count(),
            corpus.file_count()
        );

        let ctx = CheckContext::new(corpus, &settings, &self.registry);
        let results = self.runner.run_with_progress(&ctx, token, on_done)?;
        let report = AnalysisReport::new(corpus, settings, results);
        log::info!("overall status {}: {}", report.overall, report.summary);
        Ok(report)
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
