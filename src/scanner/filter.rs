use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};
use regex::Regex;

use crate::error::{Result, StyleGuardError};

pub trait FileFilter {
    /// Whether a file (path relative to the repository root) is a candidate.
    fn should_include(&self, path: &Path) -> bool;

    /// Whether the walker should enter a directory at all.
    fn should_descend(&self, _dir: &Path) -> bool {
        true
    }
}

/// Extension allow-list plus exclusion regex and globs.
///
/// The regex sees root-relative paths with `/` separators; directories are
/// tested with a trailing `/` so that a pattern like `build/` prunes the whole
/// subtree.
pub struct PathFilter {
    extensions: Vec<String>,
    exclude_regex: Option<Regex>,
    exclude_globs: GlobSet,
}

impl PathFilter {
    /// Create a new filter. An empty `exclude_path_pattern` excludes nothing.
    ///
    /// # Errors
    /// Returns an error if the regex or any exclude glob is invalid.
    pub fn new(
        extensions: Vec<String>,
        exclude_path_pattern: &str,
        exclude_globs: &[String],
    ) -> Result<Self> {
        let exclude_regex = if exclude_path_pattern.is_empty() {
            None
        } else {
            Some(Regex::new(exclude_path_pattern).map_err(|source| {
                StyleGuardError::InvalidRegex {
                    pattern: exclude_path_pattern.to_string(),
                    source,
                }
            })?)
        };

        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_globs {
            let glob = Glob::new(pattern).map_err(|e| StyleGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_globs = builder
            .build()
            .map_err(|e| StyleGuardError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            extensions,
            exclude_regex,
            exclude_globs,
        })
    }

    fn has_valid_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }

        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    fn matches_exclusion(&self, normalized: &str) -> bool {
        self.exclude_regex
            .as_ref()
            .is_some_and(|re| re.is_match(normalized))
            || self.exclude_globs.is_match(normalized.trim_end_matches('/'))
    }
}

fn normalize(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

impl FileFilter for PathFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_valid_extension(path) && !self.matches_exclusion(&normalize(path))
    }

    fn should_descend(&self, dir: &Path) -> bool {
        !self.matches_exclusion(&format!("{}/", normalize(dir)))
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
