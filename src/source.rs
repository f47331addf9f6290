use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, StyleGuardError};

/// Immutable snapshot of one file, read once per scan.
///
/// `path` is the display path relative to the repository root; the content is
/// kept as raw bytes so that a line which is not valid UTF-8 can be skipped on
/// its own instead of failing the whole file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    content: Vec<u8>,
}

/// One line of a [`SourceFile`], numbered from 1.
///
/// `text` is `None` when the line is not valid UTF-8. Checks skip such lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRecord<'a> {
    pub path: &'a Path,
    pub number: usize,
    pub text: Option<&'a str>,
}

impl LineRecord<'_> {
    /// A decodable line containing only whitespace (or nothing).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.is_some_and(|t| t.trim().is_empty())
    }
}

impl SourceFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Read `relative` under `root`, keeping `relative` as the display path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn read(root: &Path, relative: &Path) -> Result<Self> {
        let full = root.join(relative);
        let content = fs::read(&full).map_err(|source| StyleGuardError::FileRead {
            path: full.clone(),
            source,
        })?;
        Ok(Self::new(relative, content))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        self.path.extension().and_then(|e| e.to_str())
    }

    /// Lines split on `\n`. A trailing newline does not produce an extra empty line.
    pub fn lines(&self) -> impl Iterator<Item = LineRecord<'_>> {
        let body = match self.content.strip_suffix(b"\n") {
            Some(body) => Some(body),
            None if self.content.is_empty() => None,
            None => Some(self.content.as_slice()),
        };

        body.into_iter()
            .flat_map(|body| body.split(|b| *b == b'\n'))
            .enumerate()
            .map(|(idx, raw)| LineRecord {
                path: &self.path,
                number: idx + 1,
                text: std::str::from_utf8(raw).ok(),
            })
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines().count()
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
