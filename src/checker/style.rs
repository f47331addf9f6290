use crate::config::StyleConfig;
use crate::error::Result;
use crate::source::{LineRecord, SourceFile};
use crate::style::{
    BlankRunAccumulator, DoubleWhitespaceDetector, ExclusionFilter, LineClassifier,
};

use super::{Category, Checker, Violation};

const PRAGMA_ONCE: &str = "#pragma once";

/// Runs the line heuristics, the exclusion filter and the multi-line style
/// checks over one file.
pub struct StyleChecker {
    classifier: LineClassifier,
    exclusions: ExclusionFilter,
    double_whitespace: Option<DoubleWhitespaceDetector>,
    blank_runs: bool,
    header_extensions: Vec<String>,
}

impl Default for StyleChecker {
    fn default() -> Self {
        Self::from_config(&StyleConfig::default()).expect("default style config is valid")
    }
}

impl StyleChecker {
    /// # Errors
    /// Returns an error if an exclusion pattern is not a valid regex.
    pub fn from_config(config: &StyleConfig) -> Result<Self> {
        let enabled = |category: Category| !config.disabled.contains(&category);

        Ok(Self {
            classifier: LineClassifier::without(&config.disabled),
            exclusions: ExclusionFilter::new(&config.exclusion_patterns)?,
            double_whitespace: enabled(Category::DoubleWhitespace)
                .then(DoubleWhitespaceDetector::new),
            blank_runs: enabled(Category::BlankRun),
            header_extensions: if enabled(Category::PragmaOnce) {
                config.header_extensions.clone()
            } else {
                Vec::new()
            },
        })
    }

    fn is_header(&self, file: &SourceFile) -> bool {
        file.extension()
            .is_some_and(|ext| self.header_extensions.iter().any(|h| h == ext))
    }

    fn check_lines(&self, lines: &[LineRecord<'_>], violations: &mut Vec<Violation>) {
        let mut blank_run = BlankRunAccumulator::new();
        let last = lines.len().saturating_sub(1);

        for (idx, record) in lines.iter().enumerate() {
            let ends_blank_run = blank_run.observe(record);
            let Some(text) = record.text else {
                continue;
            };

            let mut matched = self.classifier.classify(text);
            if ends_blank_run && self.blank_runs {
                matched.insert(Category::BlankRun);
            }
            if let Some(detector) = &self.double_whitespace
                && idx > 0
                && idx < last
                && detector.is_violation(
                    lines[idx - 1].text.unwrap_or_default(),
                    text,
                    lines[idx + 1].text.unwrap_or_default(),
                )
            {
                matched.insert(Category::DoubleWhitespace);
            }

            violations.extend(
                self.exclusions
                    .suppress(text, matched)
                    .into_iter()
                    .map(|c| Violation::with_default_message(record.path, record.number, c)),
            );
        }
    }

    fn check_pragma_once(&self, file: &SourceFile, lines: &[LineRecord<'_>]) -> Option<Violation> {
        if !self.is_header(file) {
            return None;
        }
        let first = lines.first()?;
        let has_pragma = first.text.is_some_and(|t| t.trim_end() == PRAGMA_ONCE);
        (!has_pragma)
            .then(|| Violation::with_default_message(file.path(), 1, Category::PragmaOnce))
    }
}

impl Checker for StyleChecker {
    fn check(&self, file: &SourceFile) -> Vec<Violation> {
        let lines: Vec<_> = file.lines().collect();
        let mut violations = Vec::new();

        violations.extend(self.check_pragma_once(file, &lines));
        self.check_lines(&lines, &mut violations);

        violations
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
