use std::fmt::Write;
use std::fs;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs};
use crate::config::{Config, validate_config_semantics};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, StyleGuardError};

use super::context::load_config;

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), format, cli),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error [{}]: {e}", e.error_type());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Parses a configuration file and compiles every pattern in it.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub(crate) fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(StyleGuardError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&content)?;

    validate_config_semantics(&config)
}

fn run_config_show(config_path: Option<&Path>, format: &str, cli: &Cli) -> i32 {
    match run_config_show_impl(config_path, format, cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error [{}]: {e}", e.error_type());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Renders the effective configuration.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded, the format is
/// unknown, or serialization fails.
pub(crate) fn run_config_show_impl(
    config_path: Option<&Path>,
    format: &str,
    cli: &Cli,
) -> Result<String> {
    let config = load_config(config_path, cli.no_config)?;

    match format.to_lowercase().as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&config)?;
            Ok(format!("{json}\n"))
        }
        "text" => Ok(format_config_text(&config)),
        _ => Err(StyleGuardError::Config(format!(
            "Unknown format: {format}. Use 'text' or 'json'."
        ))),
    }
}

#[must_use]
pub(crate) fn format_config_text(config: &Config) -> String {
    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n\n");

    output.push_str("[scan]\n");
    let (roots, required) = config.scan.effective_roots();
    let origin = if required { "" } else { "  # default, skipped when missing" };
    let _ = writeln!(output, "  roots = {roots:?}{origin}");
    let _ = writeln!(
        output,
        "  exclude_path_pattern = {:?}",
        config.scan.exclude_path_pattern
    );
    let _ = writeln!(output, "  extensions = {:?}", config.scan.extensions);
    if !config.scan.exclude.is_empty() {
        let _ = writeln!(output, "  exclude = {:?}", config.scan.exclude);
    }

    output.push_str("\n[style]\n");
    let _ = writeln!(output, "  enabled = {}", config.style.enabled);
    let disabled: Vec<&str> = config.style.disabled.iter().map(|c| c.name()).collect();
    let _ = writeln!(output, "  disabled = {disabled:?}");
    let _ = writeln!(
        output,
        "  exclusion_patterns = {:?}",
        config.style.exclusion_patterns
    );
    let _ = writeln!(
        output,
        "  header_extensions = {:?}",
        config.style.header_extensions
    );

    output.push_str("\n[error_codes]\n");
    let _ = writeln!(output, "  enabled = {}", config.error_codes.enabled);

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
