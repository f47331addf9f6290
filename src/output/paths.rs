use std::fmt::Write;

use crate::error::Result;
use crate::report::Report;

use super::OutputFormatter;

/// Distinct paths with style findings, one per line, for piping into a
/// formatter.
pub struct PathListFormatter;

impl OutputFormatter for PathListFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();
        for path in report.files_with_style_violations() {
            let _ = writeln!(output, "{}", path.display());
        }
        Ok(output)
    }
}

#[cfg(test)]
#[path = "paths_tests.rs"]
mod tests;
