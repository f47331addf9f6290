use std::collections::BTreeSet;
use std::path::Path;

use crate::checker::Violation;
use crate::{EXIT_SUCCESS, EXIT_VIOLATIONS_FOUND};

/// Aggregated outcome of one run over a file set.
///
/// Violations are kept in report order (path, line, category) so that every
/// formatter prints the same, deterministic sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    violations: Vec<Violation>,
    files_checked: usize,
    files_skipped: usize,
}

impl Report {
    #[must_use]
    pub fn new(mut violations: Vec<Violation>, files_checked: usize, files_skipped: usize) -> Self {
        violations.sort_by(Violation::report_order);
        Self {
            violations,
            files_checked,
            files_skipped,
        }
    }

    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    #[must_use]
    pub const fn files_checked(&self) -> usize {
        self.files_checked
    }

    /// Files that were listed but could not be read.
    #[must_use]
    pub const fn files_skipped(&self) -> usize {
        self.files_skipped
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.is_clean() {
            EXIT_SUCCESS
        } else {
            EXIT_VIOLATIONS_FOUND
        }
    }

    /// Distinct paths with at least one violation, sorted.
    #[must_use]
    pub fn files_with_violations(&self) -> Vec<&Path> {
        self.distinct_paths(|_| true)
    }

    /// Distinct paths with at least one style finding, the candidates for an
    /// auto-formatter run.
    #[must_use]
    pub fn files_with_style_violations(&self) -> Vec<&Path> {
        self.distinct_paths(|v| v.category.is_style())
    }

    fn distinct_paths(&self, keep: impl Fn(&Violation) -> bool) -> Vec<&Path> {
        self.violations
            .iter()
            .filter(|v| keep(v))
            .map(|v| v.path.as_path())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
