//! Configuration semantic validation.
//!
//! Validates that configuration values are semantically correct after parsing.
//! This includes range checks, pattern validation, and cross-field constraints.

use crate::config::Config;
use crate::{ProvenanceError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if a setting is out of range, a glob pattern is invalid,
/// the commit bound is zero, or a custom language is misconfigured.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    config.settings.validate()?;
    validate_corpus_section(config)?;
    validate_languages_section(config)?;
    Ok(())
}

fn validate_corpus_section(config: &Config) -> Result<()> {
    if config.corpus.max_commits == 0 {
        return Err(ProvenanceError::Config(
            "corpus.max_commits must be at least 1".to_string(),
        ));
    }

    for pattern in &config.corpus.exclude {
        globset::Glob::new(pattern).map_err(|e| ProvenanceError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
    }
    Ok(())
}

fn validate_languages_section(config: &Config) -> Result<()> {
    for (name, language) in &config.languages {
        if language.extensions.is_empty() {
            return Err(ProvenanceError::Config(format!(
                "languages.{name}: must list at least one extension"
            )));
        }
        if language.line_comments.is_empty()
            && language.block_comments.is_empty()
            && language.continuation.is_none()
        {
            return Err(ProvenanceError::Config(format!(
                "languages.{name}: must define line_comments or block_comments"
            )));
        }
        let has_empty_marker = language.line_comments.iter().any(String::is_empty)
            || language
                .block_comments
                .iter()
                .any(|(open, close)| open.is_empty() || close.is_empty());
        if has_empty_marker {
            return Err(ProvenanceError::Config(format!(
                "languages.{name}: comment markers cannot be empty"
            )));
        }
    }
    Ok(())
}
