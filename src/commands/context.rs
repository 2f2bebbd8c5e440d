//! Helpers shared by the command handlers.

use std::fs;
use std::path::Path;

use crate::cli::ColorChoice;
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::{ProvenanceError, Result};
use crate::output::ColorMode;

#[must_use]
pub const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Default `env_logger` filter for the verbosity flags. `RUST_LOG` still wins.
#[must_use]
pub const fn log_filter(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Resolve the effective configuration.
///
/// An explicit path must exist; otherwise the loader's search order applies.
/// With `no_config`, built-in defaults are used and no file is read.
///
/// # Errors
/// Returns an error if a configuration file cannot be read, parsed or validated.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        log::debug!("--no-config given; using built-in defaults");
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Write rendered output to `path`, or stdout when no path is given.
///
/// # Errors
/// Returns an error if the output file cannot be written.
pub fn write_output(path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = path {
        fs::write(path, content).map_err(|source| ProvenanceError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
        if !quiet {
            eprintln!("Output written to: {}", path.display());
        }
    } else {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
