use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ProvenanceError, Result};

/// Thresholds for one analysis run.
///
/// A `Settings` is a plain value: a run captures a copy when it starts, so
/// later edits to the live [`SettingsStore`] never reach an in-flight run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Minimum contiguous added lines for a boilerplate block.
    pub min_block_lines: usize,
    /// Occurrences needed before a block counts as duplicated.
    pub duplicate_threshold: usize,
    /// Top-bigram share of all tokens that raises a warning.
    pub bigram_warn: f64,
    /// Top-bigram share of all tokens that fails the check.
    pub bigram_fail: f64,
    /// Comment entropy (bits) below which a warning is raised.
    pub entropy_warn: f64,
    /// Comment entropy (bits) below which the check fails.
    pub entropy_fail: f64,
    /// Block similarity above which two files are near-duplicates.
    pub jaccard_threshold: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_block_lines: 6,
            duplicate_threshold: 2,
            bigram_warn: 0.03,
            bigram_fail: 0.08,
            entropy_warn: 3.0,
            entropy_fail: 2.5,
            jaccard_threshold: 0.75,
        }
    }
}

/// Names of the tunable fields, in display order.
pub const SETTING_FIELDS: &[&str] = &[
    "min_block_lines",
    "duplicate_threshold",
    "bigram_warn",
    "bigram_fail",
    "entropy_warn",
    "entropy_fail",
    "jaccard_threshold",
];

impl Settings {
    /// Check every field is in range.
    ///
    /// Inverted warn/fail pairs are legal but unusual; they are logged, not rejected.
    ///
    /// # Errors
    /// Returns `InvalidSetting` for the first out-of-range field.
    pub fn validate(&self) -> Result<()> {
        check_count("min_block_lines", self.min_block_lines)?;
        check_count("duplicate_threshold", self.duplicate_threshold)?;
        check_ratio("bigram_warn", self.bigram_warn)?;
        check_ratio("bigram_fail", self.bigram_fail)?;
        check_bits("entropy_warn", self.entropy_warn)?;
        check_bits("entropy_fail", self.entropy_fail)?;
        check_ratio("jaccard_threshold", self.jaccard_threshold)?;

        if self.bigram_fail <= self.bigram_warn {
            log::warn!(
                "bigram_fail ({}) is not above bigram_warn ({})",
                self.bigram_fail,
                self.bigram_warn
            );
        }
        if self.entropy_fail >= self.entropy_warn {
            log::warn!(
                "entropy_fail ({}) is not below entropy_warn ({})",
                self.entropy_fail,
                self.entropy_warn
            );
        }
        Ok(())
    }

    /// Current value of a field, formatted for display.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<String> {
        let value = match canonical_field(field)? {
            "min_block_lines" => self.min_block_lines.to_string(),
            "duplicate_threshold" => self.duplicate_threshold.to_string(),
            "bigram_warn" => self.bigram_warn.to_string(),
            "bigram_fail" => self.bigram_fail.to_string(),
            "entropy_warn" => self.entropy_warn.to_string(),
            "entropy_fail" => self.entropy_fail.to_string(),
            "jaccard_threshold" => self.jaccard_threshold.to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Return a copy with `field` parsed from `raw`. `self` is never modified.
    ///
    /// # Errors
    /// Returns `InvalidSetting` for an unknown field, unparsable or non-finite
    /// input, or a value out of range.
    pub fn with_field(&self, field: &str, raw: &str) -> Result<Self> {
        let name = canonical_field(field)
            .ok_or_else(|| ProvenanceError::invalid_setting(field, raw, "unknown setting"))?;
        let mut next = *self;
        match name {
            "min_block_lines" => next.min_block_lines = parse_count(name, raw)?,
            "duplicate_threshold" => next.duplicate_threshold = parse_count(name, raw)?,
            "bigram_warn" => next.bigram_warn = parse_ratio(name, raw)?,
            "bigram_fail" => next.bigram_fail = parse_ratio(name, raw)?,
            "entropy_warn" => next.entropy_warn = parse_bits(name, raw)?,
            "entropy_fail" => next.entropy_fail = parse_bits(name, raw)?,
            _ => next.jaccard_threshold = parse_ratio(name, raw)?,
        }
        Ok(next)
    }
}

/// Accepts `snake_case`, `kebab-case` and `camelCase` spellings.
fn canonical_field(field: &str) -> Option<&'static str> {
    let folded: String = field
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect();
    SETTING_FIELDS
        .iter()
        .copied()
        .find(|name| name.replace('_', "") == folded)
}

fn check_count(field: &str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(ProvenanceError::invalid_setting(
            field,
            "0",
            "must be at least 1",
        ));
    }
    Ok(())
}

fn check_ratio(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ProvenanceError::invalid_setting(
            field,
            &value.to_string(),
            "must be between 0.0 and 1.0",
        ));
    }
    Ok(())
}

fn check_bits(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ProvenanceError::invalid_setting(
            field,
            &value.to_string(),
            "must be a non-negative number of bits",
        ));
    }
    Ok(())
}

fn parse_number<T: FromStr>(field: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| ProvenanceError::invalid_setting(field, raw, "not a number"))
}

fn parse_count(field: &str, raw: &str) -> Result<usize> {
    let value = parse_number(field, raw)?;
    check_count(field, value)?;
    Ok(value)
}

fn parse_ratio(field: &str, raw: &str) -> Result<f64> {
    let value = parse_number(field, raw)?;
    check_ratio(field, value)?;
    Ok(value)
}

fn parse_bits(field: &str, raw: &str) -> Result<f64> {
    let value = parse_number(field, raw)?;
    check_bits(field, value)?;
    Ok(value)
}

/// The live, editable settings. Lives with whatever drives the engine (CLI,
/// UI session), never inside a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsStore {
    current: Settings,
}

impl SettingsStore {
    #[must_use]
    pub const fn new(initial: Settings) -> Self {
        Self { current: initial }
    }

    /// Parse user input into `field`. On failure the previous value is kept.
    ///
    /// # Errors
    /// Returns `InvalidSetting` describing the rejected input.
    pub fn set(&mut self, field: &str, raw: &str) -> Result<()> {
        match self.current.with_field(field, raw) {
            Ok(next) => {
                self.current = next;
                Ok(())
            }
            Err(e) => {
                log::warn!("{e}; keeping previous value");
                Err(e)
            }
        }
    }

    /// Apply a `field=value` assignment.
    ///
    /// # Errors
    /// Returns `InvalidSetting` if the assignment is malformed or rejected.
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<()> {
        let Some((field, raw)) = assignment.split_once('=') else {
            let err = ProvenanceError::invalid_setting(assignment, "", "expected field=value");
            log::warn!("{err}; keeping previous value");
            return Err(err);
        };
        self.set(field.trim(), raw)
    }

    pub fn reset(&mut self) {
        self.current = Settings::default();
    }

    #[must_use]
    pub const fn snapshot(&self) -> Settings {
        self.current
    }
}
