use std::fs;
use std::path::{Path, PathBuf};

use crate::checker::{Checker, StyleChecker};
use crate::cli::{CheckArgs, ColorChoice};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::Result;
use crate::output::ColorMode;
use crate::scanner::{DirectoryScanner, FileSetResolver, PathFilter, ScanRoot};
use crate::symbols::ConsistencyChecker;

/// Which of the two checkers a run executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subsystems {
    pub style: bool,
    pub error_codes: bool,
}

impl Subsystems {
    pub const ALL: Self = Self {
        style: true,
        error_codes: true,
    };
    pub const STYLE: Self = Self {
        style: true,
        error_codes: false,
    };
    pub const ERROR_CODES: Self = Self {
        style: false,
        error_codes: true,
    };

    /// `check` honours the `enabled` switches; the single-subsystem commands
    /// run their checker regardless.
    #[must_use]
    pub const fn with_config(self, config: &Config) -> Self {
        if self.style && self.error_codes {
            Self {
                style: config.style.enabled,
                error_codes: config.error_codes.enabled,
            }
        } else {
            self
        }
    }
}

pub(crate) type BoxedChecker = Box<dyn Checker + Send + Sync>;

/// Everything a run needs, built once from the effective configuration.
pub(crate) struct CheckContext {
    pub root: PathBuf,
    pub roots: Vec<ScanRoot>,
    pub resolver: FileSetResolver<DirectoryScanner<PathFilter>>,
    pub checkers: Vec<BoxedChecker>,
}

impl CheckContext {
    /// # Errors
    /// Returns an error if any configured pattern fails to compile.
    pub fn from_config(config: &Config, root: &Path, subsystems: Subsystems) -> Result<Self> {
        let filter = PathFilter::new(
            config.scan.extensions.clone(),
            &config.scan.exclude_path_pattern,
            &config.scan.exclude,
        )?;
        let resolver = FileSetResolver::new(DirectoryScanner::new(filter, root));

        let (paths, required) = config.scan.effective_roots();
        let roots = paths
            .into_iter()
            .map(|path| {
                if required {
                    ScanRoot::required(path)
                } else {
                    ScanRoot::optional(path)
                }
            })
            .collect();

        let mut checkers: Vec<BoxedChecker> = Vec::new();
        if subsystems.style {
            checkers.push(Box::new(StyleChecker::from_config(&config.style)?));
        }
        if subsystems.error_codes {
            checkers.push(Box::new(ConsistencyChecker::new()));
        }

        Ok(Self {
            root: root.to_path_buf(),
            roots,
            resolver,
            checkers,
        })
    }
}

#[must_use]
pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load configuration from `config_path`, or `.style-guard.toml` in the
/// current directory, or defaults.
///
/// # Errors
/// Returns an error if the configuration file exists but cannot be read or parsed.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Command line flags take precedence over the configuration file.
pub(crate) fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if !args.paths.is_empty() {
        config.scan.roots = Some(
            args.paths
                .iter()
                .map(|p| p.to_string_lossy().into_owned())
                .collect(),
        );
    }
    if let Some(ext) = &args.ext {
        config.scan.extensions.clone_from(ext);
    }
    if let Some(pattern) = &args.exclude_regex {
        config.scan.exclude_path_pattern.clone_from(pattern);
    }
    config.scan.exclude.extend(args.exclude.iter().cloned());
    for category in &args.disable {
        if !config.style.disabled.contains(category) {
            config.style.disabled.push(*category);
        }
    }
}

/// Write to `output_path`, or to stdout unless `quiet`.
///
/// # Errors
/// Returns an error if the output file or its parent directory cannot be written.
pub(crate) fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
