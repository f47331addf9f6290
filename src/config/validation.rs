//! Configuration semantic validation.
//!
//! Parsing only guarantees the shape of the file. These checks compile every
//! pattern up front so that a bad regex or glob is reported before any file is
//! read.

use regex::Regex;

use crate::config::Config;
use crate::error::{Result, StyleGuardError};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if a regex or glob does not compile, an extension is empty,
/// or `style.disabled` names a category outside the style family.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_scan_section(config)?;
    validate_style_section(config)?;
    Ok(())
}

fn validate_scan_section(config: &Config) -> Result<()> {
    compile_regex(&config.scan.exclude_path_pattern)?;

    for pattern in &config.scan.exclude {
        globset::Glob::new(pattern).map_err(|e| StyleGuardError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
    }

    if let Some(ext) = config.scan.extensions.iter().find(|e| is_bad_extension(e)) {
        return Err(StyleGuardError::Config(format!(
            "scan.extensions entries must be non-empty and without a leading dot, got '{ext}'"
        )));
    }

    if let Some(roots) = &config.scan.roots
        && roots.is_empty()
    {
        return Err(StyleGuardError::Config(
            "scan.roots must not be empty; remove it to use the default roots".to_string(),
        ));
    }
    Ok(())
}

fn validate_style_section(config: &Config) -> Result<()> {
    for pattern in &config.style.exclusion_patterns {
        compile_regex(pattern)?;
    }

    if let Some(category) = config.style.disabled.iter().find(|c| !c.is_style()) {
        return Err(StyleGuardError::Config(format!(
            "style.disabled contains '{category}', which is not a style category"
        )));
    }

    if let Some(ext) = config
        .style
        .header_extensions
        .iter()
        .find(|e| is_bad_extension(e))
    {
        return Err(StyleGuardError::Config(format!(
            "style.header_extensions entries must be non-empty and without a leading dot, got '{ext}'"
        )));
    }
    Ok(())
}

fn compile_regex(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        return Ok(());
    }
    Regex::new(pattern).map_err(|source| StyleGuardError::InvalidRegex {
        pattern: pattern.to_string(),
        source,
    })?;
    Ok(())
}

fn is_bad_extension(ext: &str) -> bool {
    ext.is_empty() || ext.starts_with('.')
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
