use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of finding reported by either subsystem.
///
/// Style categories come from the line heuristics and file-level style checks;
/// error-code categories come from the per-file consistency check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    BracePlacement,
    TrailingWhitespace,
    Indentation,
    Tab,
    ControlParenSpace,
    PaddedParen,
    NamespaceComment,
    DoubleWhitespace,
    BlankRun,
    PragmaOnce,
    ConflictMarker,
    UnusedErrorCode,
    UndefinedErrorCode,
    DuplicateErrorCode,
}

impl Category {
    pub const STYLE: [Self; 11] = [
        Self::BracePlacement,
        Self::TrailingWhitespace,
        Self::Indentation,
        Self::Tab,
        Self::ControlParenSpace,
        Self::PaddedParen,
        Self::NamespaceComment,
        Self::DoubleWhitespace,
        Self::BlankRun,
        Self::PragmaOnce,
        Self::ConflictMarker,
    ];

    pub const ERROR_CODES: [Self; 3] = [
        Self::UnusedErrorCode,
        Self::UndefinedErrorCode,
        Self::DuplicateErrorCode,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BracePlacement => "brace-placement",
            Self::TrailingWhitespace => "trailing-whitespace",
            Self::Indentation => "indentation",
            Self::Tab => "tab",
            Self::ControlParenSpace => "control-paren-space",
            Self::PaddedParen => "padded-paren",
            Self::NamespaceComment => "namespace-comment",
            Self::DoubleWhitespace => "double-whitespace",
            Self::BlankRun => "blank-run",
            Self::PragmaOnce => "pragma-once",
            Self::ConflictMarker => "conflict-marker",
            Self::UnusedErrorCode => "unused-error-code",
            Self::UndefinedErrorCode => "undefined-error-code",
            Self::DuplicateErrorCode => "duplicate-error-code",
        }
    }

    /// Default message for line-level style findings.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::BracePlacement => "opening brace should be on its own line",
            Self::TrailingWhitespace => "trailing whitespace",
            Self::Indentation => "indentation is not a multiple of 4 spaces",
            Self::Tab => "tab character",
            Self::ControlParenSpace => "missing space between keyword and '('",
            Self::PaddedParen => "whitespace just inside parentheses",
            Self::NamespaceComment => "redundant namespace comment after closing brace",
            Self::DoubleWhitespace => "double whitespace after comma",
            Self::BlankRun => "more than two consecutive empty lines",
            Self::PragmaOnce => "header must start with '#pragma once'",
            Self::ConflictMarker => "merge conflict marker",
            Self::UnusedErrorCode => "error code declared but not used in this file",
            Self::UndefinedErrorCode => "error code used but not declared in this file",
            Self::DuplicateErrorCode => "error code declared more than once in this file",
        }
    }

    /// Whether the exclusion filter may cancel this category.
    ///
    /// Tabs and namespace-end comments are unconditional, as are conflict
    /// markers and the file-level pragma check.
    #[must_use]
    pub const fn is_excludable(self) -> bool {
        matches!(
            self,
            Self::BracePlacement
                | Self::TrailingWhitespace
                | Self::Indentation
                | Self::ControlParenSpace
                | Self::PaddedParen
                | Self::DoubleWhitespace
                | Self::BlankRun
        )
    }

    #[must_use]
    pub const fn is_style(self) -> bool {
        !self.is_error_code()
    }

    #[must_use]
    pub const fn is_error_code(self) -> bool {
        matches!(
            self,
            Self::UnusedErrorCode | Self::UndefinedErrorCode | Self::DuplicateErrorCode
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::STYLE
            .iter()
            .chain(Self::ERROR_CODES.iter())
            .copied()
            .find(|c| c.name() == s)
            .ok_or_else(|| format!("Unknown category: {s}"))
    }
}

/// A single finding: one category observed at one line of one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub path: PathBuf,
    pub line: usize,
    pub category: Category,
    pub message: String,
}

impl Violation {
    #[must_use]
    pub fn new(path: &Path, line: usize, category: Category, message: impl Into<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            line,
            category,
            message: message.into(),
        }
    }

    /// Create a violation carrying the category's default description.
    #[must_use]
    pub fn with_default_message(path: &Path, line: usize, category: Category) -> Self {
        Self::new(path, line, category, category.description())
    }

    /// Ordering used for every report: path, then line, then category.
    #[must_use]
    pub fn report_order(&self, other: &Self) -> std::cmp::Ordering {
        self.path
            .cmp(&other.path)
            .then(self.line.cmp(&other.line))
            .then(self.category.cmp(&other.category))
            .then_with(|| self.message.cmp(&other.message))
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {}: {}",
            self.path.display(),
            self.line,
            self.category,
            self.message
        )
    }
}

#[cfg(test)]
#[path = "violation_tests.rs"]
mod tests;
