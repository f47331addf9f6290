use std::collections::BTreeSet;

use regex::Regex;

use crate::checker::Category;
use crate::error::{Result, StyleGuardError};

pub type CategorySet = BTreeSet<Category>;

/// `{` closing a block header instead of standing on its own line.
const BRACE_PLACEMENT: &str = r"(\b(class|struct|namespace|enum|if|for|while|else|throw|switch)\b.*|\)(\s*const)?(\s*override)?\s*)\{$";
const TRAILING_WHITESPACE: &str = r"\s$";
/// 1-3 leading spaces; a leading `*` continues a block comment.
const INDENTATION: &str = r"^ {1,3}[^\* ]\S";
const CONTROL_PAREN_SPACE: &str =
    r"^\s*(if|else if|if constexpr|else if constexpr|for|while|catch|switch)\(";
const PADDED_PAREN: &str = r"\( [^\s\\]|\S \)";
const NAMESPACE_COMMENT: &str = r"\}\s*//+\s*namespace";
const CONFLICT_MARKER: &str = r"^(<{7}|>{7})( |$)|^={7}$";

/// A single line heuristic.
pub trait LinePredicate: Send + Sync {
    fn category(&self) -> Category;

    fn matches(&self, line: &str) -> bool;

    fn evaluate(&self, line: &str) -> Option<Category> {
        self.matches(line).then(|| self.category())
    }
}

/// Heuristic backed by a regular expression.
#[derive(Debug, Clone)]
pub struct PatternPredicate {
    category: Category,
    pattern: Regex,
}

impl PatternPredicate {
    /// # Errors
    /// Returns an error if `pattern` is not a valid regex.
    pub fn new(category: Category, pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|source| StyleGuardError::InvalidRegex {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { category, pattern })
    }

    fn builtin(category: Category, pattern: &str) -> Self {
        Self {
            category,
            pattern: Regex::new(pattern).expect("Invalid regex"),
        }
    }
}

impl LinePredicate for PatternPredicate {
    fn category(&self) -> Category {
        self.category
    }

    fn matches(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }
}

/// Any literal tab, anywhere in the line.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabPredicate;

impl LinePredicate for TabPredicate {
    fn category(&self) -> Category {
        Category::Tab
    }

    fn matches(&self, line: &str) -> bool {
        line.contains('\t')
    }
}

/// Runs every line predicate over a line and collects the categories that fire.
///
/// It knows nothing about comments or string literals; pair it with an
/// [`super::ExclusionFilter`].
pub struct LineClassifier {
    predicates: Vec<Box<dyn LinePredicate>>,
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LineClassifier {
    /// Classifier with every built-in line heuristic.
    #[must_use]
    pub fn new() -> Self {
        Self {
            predicates: Self::builtin_predicates(),
        }
    }

    /// Classifier with the built-in heuristics minus the `disabled` categories.
    #[must_use]
    pub fn without(disabled: &[Category]) -> Self {
        let predicates = Self::builtin_predicates()
            .into_iter()
            .filter(|p| !disabled.contains(&p.category()))
            .collect();
        Self { predicates }
    }

    fn builtin_predicates() -> Vec<Box<dyn LinePredicate>> {
        vec![
            Box::new(PatternPredicate::builtin(
                Category::BracePlacement,
                BRACE_PLACEMENT,
            )),
            Box::new(PatternPredicate::builtin(
                Category::TrailingWhitespace,
                TRAILING_WHITESPACE,
            )),
            Box::new(PatternPredicate::builtin(Category::Indentation, INDENTATION)),
            Box::new(TabPredicate),
            Box::new(PatternPredicate::builtin(
                Category::ControlParenSpace,
                CONTROL_PAREN_SPACE,
            )),
            Box::new(PatternPredicate::builtin(Category::PaddedParen, PADDED_PAREN)),
            Box::new(PatternPredicate::builtin(
                Category::NamespaceComment,
                NAMESPACE_COMMENT,
            )),
            Box::new(PatternPredicate::builtin(
                Category::ConflictMarker,
                CONFLICT_MARKER,
            )),
        ]
    }


    #[must_use]
    pub fn classify(&self, line: &str) -> CategorySet {
        self.predicates
            .iter()
            .filter_map(|p| p.evaluate(line))
            .collect()
    }
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
