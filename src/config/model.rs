use serde::{Deserialize, Serialize};

use crate::checker::Category;

/// Source subtrees scanned when no roots are configured.
pub const DEFAULT_ROOTS: [&str; 4] = ["src", "base", "programs", "utils"];

/// Vendored, build and generated directories.
pub const DEFAULT_EXCLUDE_PATH_PATTERN: &str =
    "(^|/)(build|contrib|third_party|vendor|generated)/";

pub const DEFAULT_EXTENSIONS: [&str; 10] = [
    "h", "hh", "hpp", "hxx", "c", "cc", "cpp", "cxx", "ipp", "inl",
];

pub const DEFAULT_HEADER_EXTENSIONS: [&str; 4] = ["h", "hh", "hpp", "hxx"];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub style: StyleConfig,

    #[serde(default)]
    pub error_codes: ErrorCodesConfig,
}

/// File discovery settings [scan].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanConfig {
    /// Directories to scan, relative to the repository root.
    /// `None` means [`DEFAULT_ROOTS`], which are skipped silently when missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roots: Option<Vec<String>>,

    /// Regex matched against root-relative paths (`/` separated); matches are skipped.
    #[serde(default = "default_exclude_path_pattern")]
    pub exclude_path_pattern: String,

    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Additional glob excludes, additive to `exclude_path_pattern`.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            roots: None,
            exclude_path_pattern: default_exclude_path_pattern(),
            extensions: default_extensions(),
            exclude: Vec::new(),
        }
    }
}

impl ScanConfig {
    /// Configured roots, or the defaults. The flag is `true` when the roots were
    /// given explicitly and therefore must exist.
    #[must_use]
    pub fn effective_roots(&self) -> (Vec<String>, bool) {
        self.roots.as_ref().map_or_else(
            || (DEFAULT_ROOTS.iter().map(ToString::to_string).collect(), false),
            |roots| (roots.clone(), true),
        )
    }
}

/// Style scanner settings [style].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StyleConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Style categories to skip, by name (e.g. "double-whitespace").
    #[serde(default)]
    pub disabled: Vec<Category>,

    /// Regexes of lines whose excludable findings are dropped.
    #[serde(default = "default_exclusion_patterns")]
    pub exclusion_patterns: Vec<String>,

    /// Extensions that must start with `#pragma once`.
    #[serde(default = "default_header_extensions")]
    pub header_extensions: Vec<String>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            disabled: Vec::new(),
            exclusion_patterns: default_exclusion_patterns(),
            header_extensions: default_header_extensions(),
        }
    }
}

/// Error-code consistency settings [error_codes].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorCodesConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for ErrorCodesConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

const fn default_true() -> bool {
    true
}

fn default_exclude_path_pattern() -> String {
    DEFAULT_EXCLUDE_PATH_PATTERN.to_string()
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect()
}

fn default_header_extensions() -> Vec<String> {
    DEFAULT_HEADER_EXTENSIONS
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn default_exclusion_patterns() -> Vec<String> {
    crate::style::DEFAULT_EXCLUSION_SHAPES
        .iter()
        .map(ToString::to_string)
        .collect()
}
