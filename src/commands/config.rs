use std::fmt::Write;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs, ConfigOutputFormat};
use crate::config::{Config, ConfigLoader, FileConfigLoader, SETTING_FIELDS};
use crate::output::print_error;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, ProvenanceError, Result};

use super::context::load_config;

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), *format, cli),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(ProvenanceError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }
    FileConfigLoader::new().load_from_path(config_path)?;
    Ok(())
}

fn run_config_show(config_path: Option<&Path>, format: ConfigOutputFormat, cli: &Cli) -> i32 {
    match run_config_show_impl(config_path, format, cli.no_config) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Shows the effective configuration.
///
/// # Errors
/// Returns an error if the configuration file cannot be loaded or serialization fails.
pub fn run_config_show_impl(
    config_path: Option<&Path>,
    format: ConfigOutputFormat,
    no_config: bool,
) -> Result<String> {
    let config = load_config(config_path, no_config)?;

    match format {
        ConfigOutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config)?;
            Ok(format!("{json}\n"))
        }
        ConfigOutputFormat::Text => Ok(format_config_text(&config)),
    }
}

#[must_use]
pub fn format_config_text(config: &Config) -> String {
    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n\n");

    output.push_str("[settings]\n");
    for field in SETTING_FIELDS {
        if let Some(value) = config.settings.get(field) {
            let _ = writeln!(output, "  {field} = {value}");
        }
    }

    output.push_str("\n[corpus]\n");
    let _ = writeln!(output, "  max_commits = {}", config.corpus.max_commits);
    if !config.corpus.exclude.is_empty() {
        let _ = writeln!(output, "  exclude = {:?}", config.corpus.exclude);
    }

    output.push_str("\n[output]\n");
    let _ = writeln!(output, "  max_details = {}", config.output.max_details);

    for (name, language) in &config.languages {
        let _ = writeln!(output, "\n[languages.{name}]");
        let _ = writeln!(output, "  extensions = {:?}", language.extensions);
        if !language.line_comments.is_empty() {
            let _ = writeln!(output, "  line_comments = {:?}", language.line_comments);
        }
        if !language.block_comments.is_empty() {
            let _ = writeln!(output, "  block_comments = {:?}", language.block_comments);
        }
        if let Some(marker) = &language.continuation {
            let _ = writeln!(output, "  continuation = {marker:?}");
        }
    }

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
