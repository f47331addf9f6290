use indexmap::IndexMap;

use crate::checker::{Category, Checker, Violation};
use crate::source::SourceFile;

use super::SymbolExtractor;

/// Reports unused, undefined and duplicate error-code declarations per file.
///
/// Resolution never looks outside the file: a code declared in a header does
/// not count as declared in the source file that includes it.
#[derive(Default)]
pub struct ConsistencyChecker {
    extractor: SymbolExtractor,
}

impl ConsistencyChecker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Checker for ConsistencyChecker {
    fn check(&self, file: &SourceFile) -> Vec<Violation> {
        let symbols = self.extractor.extract(file);
        if symbols.declarations.is_empty() && symbols.usages.is_empty() {
            return Vec::new();
        }

        let declared = group_lines(symbols.declarations.iter().map(|d| (d.name, d.line)));
        let used = group_lines(symbols.usages.iter().map(|u| (u.name, u.line)));
        let path = file.path();
        let mut violations = Vec::new();

        for (name, lines) in &declared {
            if !used.contains_key(name) {
                violations.push(Violation::new(
                    path,
                    lines[0],
                    Category::UnusedErrorCode,
                    format!("error code {name} is declared but not used in this file"),
                ));
            }
            if lines.len() > 1 {
                violations.push(Violation::new(
                    path,
                    lines[0],
                    Category::DuplicateErrorCode,
                    format!(
                        "error code {name} is declared {} times in this file",
                        lines.len()
                    ),
                ));
            }
        }

        for (name, lines) in &used {
            if !declared.contains_key(name) {
                violations.push(Violation::new(
                    path,
                    lines[0],
                    Category::UndefinedErrorCode,
                    format!("error code {name} is used but not declared in this file"),
                ));
            }
        }

        violations
    }
}

/// Occurrence lines per name, keyed in first-seen order.
fn group_lines<'a>(
    occurrences: impl Iterator<Item = (&'a str, usize)>,
) -> IndexMap<&'a str, Vec<usize>> {
    let mut grouped: IndexMap<&str, Vec<usize>> = IndexMap::new();
    for (name, line) in occurrences {
        grouped.entry(name).or_default().push(line);
    }
    grouped
}

#[cfg(test)]
#[path = "consistency_tests.rs"]
mod tests;
