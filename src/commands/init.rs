use std::fs;

use crate::cli::InitArgs;
use crate::output::print_error;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, ProvenanceError, Result};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(ProvenanceError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template()).map_err(|source| {
        ProvenanceError::FileWrite {
            path: output_path.clone(),
            source,
        }
    })?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# diff-provenance configuration file

[settings]
# Minimum contiguous added lines for a block to count as boilerplate (default: 6)
min_block_lines = 6

# Occurrences of the same block before it is reported (default: 2)
duplicate_threshold = 2

# Share of all tokens taken by the most frequent bigram (0.0-1.0)
bigram_warn = 0.03
bigram_fail = 0.08

# Comment vocabulary entropy in bits; lower is more formulaic
entropy_warn = 3.0
entropy_fail = 2.5

# Token-set similarity above which two blocks are near duplicates (0.0-1.0)
jaccard_threshold = 0.75

[corpus]
# Commits read from the snapshot, in the order they appear (default: 300)
max_commits = 300

# Files left out of every check (glob syntax)
exclude = ["**/*.lock", "**/package-lock.json"]

[output]
# Details listed per check in text and markdown output; 0 shows all (default: 5)
max_details = 5

# Comment syntax for languages missing from the built-in table
# [languages.tex]
# extensions = ["tex", "sty"]
# line_comments = ["%"]

# [languages.lua]
# extensions = ["lua"]
# line_comments = ["--"]
# block_comments = [["--[[", "]]"]]
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
