use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, StyleGuardError};

use super::FileScanner;

/// A directory to scan, relative to the repository root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRoot {
    pub path: PathBuf,
    /// Explicitly requested roots must exist; default roots may be absent.
    pub required: bool,
}

impl ScanRoot {
    #[must_use]
    pub fn required(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: true,
        }
    }

    #[must_use]
    pub fn optional(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: false,
        }
    }
}

/// Turns a list of roots into the sorted, de-duplicated set of candidate files.
pub struct FileSetResolver<S: FileScanner> {
    scanner: S,
}

impl<S: FileScanner> FileSetResolver<S> {
    #[must_use]
    pub const fn new(scanner: S) -> Self {
        Self { scanner }
    }

    /// Validate the repository root and every required root, then scan.
    ///
    /// # Errors
    /// Returns a configuration error if the base directory or a required root
    /// does not exist, or an error from the underlying scanner.
    pub fn resolve(&self, roots: &[ScanRoot]) -> Result<Vec<PathBuf>> {
        let base = self.scanner.base();
        if !base.is_dir() {
            return Err(StyleGuardError::Config(format!(
                "Repository root is not a directory: {}",
                base.display()
            )));
        }

        let mut files = BTreeSet::new();
        for root in roots {
            if !Self::root_exists(base, root)? {
                continue;
            }
            files.extend(self.scanner.scan(&root.path)?);
        }

        Ok(files.into_iter().collect())
    }

    fn root_exists(base: &Path, root: &ScanRoot) -> Result<bool> {
        let full = base.join(&root.path);
        if full.exists() {
            return Ok(true);
        }
        if root.required {
            return Err(StyleGuardError::Config(format!(
                "Scan root does not exist: {}",
                full.display()
            )));
        }
        debug!("Skipping missing default root: {}", full.display());
        Ok(false)
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
