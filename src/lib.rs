pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod corpus;
pub mod diff;
pub mod engine;
pub mod error;
pub mod language;
pub mod output;
pub mod session;
pub mod text;

pub use checker::{AnalysisReport, CheckResult, CheckStatus};
pub use engine::Engine;
pub use error::{ProvenanceError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_SUSPICIOUS: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Process exit code for an overall status. Warnings only fail under `strict`.
#[must_use]
pub const fn exit_code_for(overall: CheckStatus, strict: bool) -> i32 {
    match overall {
        CheckStatus::Pass => EXIT_SUCCESS,
        CheckStatus::Warning => {
            if strict {
                EXIT_SUSPICIOUS
            } else {
                EXIT_SUCCESS
            }
        }
        CheckStatus::Fail => EXIT_SUSPICIOUS,
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
