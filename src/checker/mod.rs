mod boilerplate;
mod comment_churn;
mod comment_density;
mod context;
mod entropy;
mod near_duplicate;
mod phrasing;
mod report;
mod result;
mod runner;

pub use boilerplate::Boilerplate;
pub use comment_churn::CommentChurn;
pub use comment_density::CommentDensity;
pub use context::CheckContext;
pub use entropy::CommentEntropy;
pub use near_duplicate::{MAX_BLOCKS_PER_FILE, NEAR_DUPLICATE_MIN_LINES, NearDuplicate};
pub use phrasing::RepetitivePhrasing;
pub use report::{AnalysisReport, aggregate_status, summarize};
pub use result::{CheckInfo, CheckResult, CheckStatus, MetricValue};
pub use runner::{CancellationToken, CheckRunner, Schedule};

/// One provenance heuristic.
///
/// A check only reads the context it is given and builds its own result, so
/// checks can run in any order or concurrently.
pub trait Check: Send + Sync {
    /// Stable identity, also used when the check cannot complete.
    fn info(&self) -> &'static CheckInfo;

    /// Evaluate the whole corpus.
    fn run(&self, ctx: &CheckContext<'_>) -> CheckResult;
}

/// The six checks in display order.
#[must_use]
pub fn default_checks() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(CommentDensity),
        Box::new(CommentChurn),
        Box::new(Boilerplate),
        Box::new(RepetitivePhrasing),
        Box::new(CommentEntropy),
        Box::new(NearDuplicate),
    ]
}
