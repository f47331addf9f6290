use regex::Regex;

use crate::error::{Result, StyleGuardError};

use super::CategorySet;

/// Lines matching any of these are explainable by context the classifier
/// cannot see: a `//` comment, a block comment continuation, embedded shell
/// arithmetic, or the tail of a raw string literal.
pub const DEFAULT_EXCLUSION_SHAPES: [&str; 4] = [r"//", r"^\s+\*", r"\$\(\(", r#" \)""#];

/// Cancels excludable categories on lines that match an exclusion shape.
#[derive(Debug, Clone)]
pub struct ExclusionFilter {
    shapes: Vec<Regex>,
}

impl Default for ExclusionFilter {
    fn default() -> Self {
        Self {
            shapes: DEFAULT_EXCLUSION_SHAPES
                .iter()
                .map(|p| Regex::new(p).expect("Invalid regex"))
                .collect(),
        }
    }
}

impl ExclusionFilter {
    /// Build a filter from user-supplied exclusion shapes.
    ///
    /// # Errors
    /// Returns an error naming the first pattern that fails to compile.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let shapes = patterns
            .iter()
            .map(|p| {
                let p = p.as_ref();
                Regex::new(p).map_err(|source| StyleGuardError::InvalidRegex {
                    pattern: p.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { shapes })
    }

    #[must_use]
    pub fn is_excluded_line(&self, line: &str) -> bool {
        self.shapes.iter().any(|shape| shape.is_match(line))
    }

    /// Drop every excludable category from `matched` if the line has an exclusion shape.
    #[must_use]
    pub fn suppress(&self, line: &str, matched: CategorySet) -> CategorySet {
        if !matched.iter().any(|c| c.is_excludable()) || !self.is_excluded_line(line) {
            return matched;
        }
        matched.into_iter().filter(|c| !c.is_excludable()).collect()
    }
}

#[cfg(test)]
#[path = "exclusion_tests.rs"]
mod tests;
