mod filter;
mod resolver;

pub use filter::{FileFilter, PathFilter};
pub use resolver::{FileSetResolver, ScanRoot};

use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use crate::error::Result;

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory (relative to the scanner's base) and return all
    /// matching file paths, relative to the base.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;

    /// Directory all scanned paths are relative to.
    fn base(&self) -> &Path;
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    base: PathBuf,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub fn new(filter: F, base: impl Into<PathBuf>) -> Self {
        Self {
            filter,
            base: base.into(),
        }
    }

    fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.base).unwrap_or(path)
    }

    fn scan_impl(&self, root: &Path) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(self.base.join(root))
            .into_iter()
            .filter_entry(|e| {
                e.depth() == 0
                    || !e.file_type().is_dir()
                    || self.filter.should_descend(self.relative(e.path()))
            })
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!("Skipping unreadable path: {err}");
                    None
                }
            })
            .filter(|e| e.file_type().is_file())
            .map(|e| self.relative(e.path()).to_path_buf())
            .filter(|p| self.filter.should_include(p))
            .collect();
        files.sort();
        files
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        Ok(self.scan_impl(root))
    }

    fn base(&self) -> &Path {
        &self.base
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
