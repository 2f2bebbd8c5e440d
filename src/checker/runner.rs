use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use rayon::prelude::*;

use super::{Check, CheckContext, CheckResult, default_checks};
use crate::{ProvenanceError, Result};

/// Shared flag polled before each check starts.
///
/// Clones observe the same flag, so a handle kept by the caller can stop a
/// run executing elsewhere.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Schedule {
    Sequential,
    #[default]
    Parallel,
}

/// Runs a fixed set of checks against one context.
///
/// Results come back in check order whatever the schedule.
pub struct CheckRunner {
    checks: Vec<Box<dyn Check>>,
    schedule: Schedule,
}

impl Default for CheckRunner {
    fn default() -> Self {
        Self::new(default_checks())
    }
}

impl CheckRunner {
    #[must_use]
    pub fn new(checks: Vec<Box<dyn Check>>) -> Self {
        Self {
            checks,
            schedule: Schedule::default(),
        }
    }

    #[must_use]
    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    #[must_use]
    pub const fn schedule(&self) -> Schedule {
        self.schedule
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run every check.
    ///
    /// # Errors
    /// Returns `ProvenanceError::Cancelled` if the token is set before any
    /// check starts.
    pub fn run(&self, ctx: &CheckContext<'_>, token: &CancellationToken) -> Result<Vec<CheckResult>> {
        self.run_with_progress(ctx, token, |_| {})
    }

    /// Run every check, calling `on_done` as each one finishes.
    ///
    /// # Errors
    /// Returns `ProvenanceError::Cancelled` if the token is set before any
    /// check starts.
    pub fn run_with_progress<F>(
        &self,
        ctx: &CheckContext<'_>,
        token: &CancellationToken,
        on_done: F,
    ) -> Result<Vec<CheckResult>>
    where
        F: Fn(&CheckResult) + Sync,
    {
        let run_one = |check: &dyn Check| -> Result<CheckResult> {
            let result = run_isolated(check, ctx, token)?;
            on_done(&result);
            Ok(result)
        };

        match self.schedule {
            Schedule::Sequential => self.checks.iter().map(|c| run_one(c.as_ref())).collect(),
            Schedule::Parallel => self
                .checks
                .par_iter()
                .map(|c| run_one(c.as_ref()))
                .collect(),
        }
    }
}

/// Run one check, turning a panic into a degraded `pass` result.
fn run_isolated(
    check: &dyn Check,
    ctx: &CheckContext<'_>,
    token: &CancellationToken,
) -> Result<CheckResult> {
    if token.is_cancelled() {
        return Err(ProvenanceError::Cancelled);
    }
    let info = check.info();
    let started = Instant::now();
    match catch_unwind(AssertUnwindSafe(|| check.run(ctx))) {
        Ok(result) => {
            log::debug!(
                "check {} finished as {} in {:?}",
                info.id,
                result.status,
                started.elapsed()
            );
            Ok(result)
        }
        Err(payload) => {
            let reason = panic_message(payload.as_ref());
            log::warn!("check {} aborted: {reason}", info.id);
            Ok(CheckResult::degraded(info, &reason))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
