//! Live analysis state for an interactive driver.
//!
//! The session owns the editable settings and the currently loaded corpus.
//! Each run captures both at start; reloading the corpus bumps a generation
//! counter and cancels the in-flight run, and results from an older
//! generation are discarded on [`AnalysisSession::accept`].

use std::sync::Arc;

use crate::checker::{AnalysisReport, CancellationToken, CheckResult};
use crate::config::{Settings, SettingsStore};
use crate::corpus::Corpus;
use crate::engine::Engine;
use crate::error::{ProvenanceError, Result};

#[derive(Debug, Default)]
pub struct AnalysisSession {
    settings: SettingsStore,
    corpus: Option<Arc<Corpus>>,
    generation: u64,
    active: Option<CancellationToken>,
}

impl AnalysisSession {
    #[must_use]
    pub const fn new(settings: SettingsStore) -> Self {
        Self {
            settings,
            corpus: None,
            generation: 0,
            active: None,
        }
    }

    #[must_use]
    pub const fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    /// Edits apply to the next run only.
    pub const fn settings_mut(&mut self) -> &mut SettingsStore {
        &mut self.settings
    }

    #[must_use]
    pub fn corpus(&self) -> Option<&Corpus> {
        self.corpus.as_deref()
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the loaded corpus. Any run started before this call is
    /// cancelled and its result will be rejected.
    pub fn load(&mut self, corpus: Corpus) {
        self.cancel();
        self.generation += 1;
        log::debug!(
            "loaded corpus generation {} ({} commits)",
            self.generation,
            corpus.commit_count()
        );
        self.corpus = Some(Arc::new(corpus));
    }

    /// Cancel the in-flight run, if any.
    pub fn cancel(&mut self) {
        if let Some(token) = self.active.take() {
            token.cancel();
        }
    }

    /// Capture the corpus and a settings snapshot for a new run.
    ///
    /// # Errors
    /// Returns `ProvenanceError::NoData` when nothing, or an empty corpus, is loaded.
    pub fn begin_run(&mut self) -> Result<RunHandle> {
        let corpus = match &self.corpus {
            Some(corpus) if !corpus.is_empty() => Arc::clone(corpus),
            _ => return Err(ProvenanceError::NoData),
        };
        self.cancel();
        let token = CancellationToken::new();
        self.active = Some(token.clone());
        Ok(RunHandle {
            corpus,
            settings: self.settings.snapshot(),
            generation: self.generation,
            token,
        })
    }

    /// Accept a finished run. Returns `None` when the corpus was reloaded
    /// after the run began.
    pub fn accept(&mut self, run: CompletedRun) -> Option<AnalysisReport> {
        if run.generation != self.generation {
            log::debug!(
                "discarding result of generation {} (current {})",
                run.generation,
                self.generation
            );
            return None;
        }
        self.active = None;
        Some(run.report)
    }
}

/// Everything one run needs, detached from the session so it can execute
/// on another thread.
#[derive(Debug, Clone)]
pub struct RunHandle {
    corpus: Arc<Corpus>,
    settings: Settings,
    generation: u64,
    token: CancellationToken,
}

impl RunHandle {
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub const fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// # Errors
    /// Returns `ProvenanceError::Cancelled` if the session cancelled this run.
    pub fn execute(&self, engine: &Engine) -> Result<CompletedRun> {
        self.execute_with(engine, |_| {})
    }

    /// # Errors
    /// Returns `ProvenanceError::Cancelled` if the session cancelled this run.
    pub fn execute_with<F>(&self, engine: &Engine, on_done: F) -> Result<CompletedRun>
    where
        F: Fn(&CheckResult) + Sync,
    {
        let report = engine.analyze_with(&self.corpus, self.settings, &self.token, on_done)?;
        Ok(CompletedRun {
            generation: self.generation,
            report,
        })
    }
}

/// A finished report tagged with the corpus generation it was computed from.
#[derive(Debug, Clone)]
pub struct CompletedRun {
    generation: u64,
    report: AnalysisReport,
}

impl CompletedRun {
    #[must_use]
    pub const fn report(&self) -> &AnalysisReport {
        &self.report
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
