use std::fs;

use crate::cli::InitArgs;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, StyleGuardError};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes the default configuration template.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub(crate) fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(StyleGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r##"# style-guard configuration file

[scan]
# Directories to scan, relative to the repository root.
# When unset, src, base, programs and utils are scanned if they exist.
# Roots listed here must exist.
# roots = ["src", "base", "programs", "utils"]

# Root-relative paths (with / separators) matching this regex are skipped.
exclude_path_pattern = "(^|/)(build|contrib|third_party|vendor|generated)/"

extensions = ["h", "hh", "hpp", "hxx", "c", "cc", "cpp", "cxx", "ipp", "inl"]

# Additional exclude patterns (glob syntax)
exclude = []

[style]
enabled = true

# Style categories to skip, e.g. ["double-whitespace", "blank-run"]
disabled = []

# Lines matching any of these regexes still report tab, namespace-comment
# and conflict-marker. Other line categories are dropped.
exclusion_patterns = ['//', '^\s+\*', '\$\(\(', ' \)"']

# Headers that must start with #pragma once
header_extensions = ["h", "hh", "hpp", "hxx"]

[error_codes]
# Per-file consistency of `extern const int NAME;` and `ErrorCodes::NAME`
enabled = true
"##
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
