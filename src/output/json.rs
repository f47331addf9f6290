use serde::Serialize;

use crate::checker::Violation;
use crate::error::Result;
use crate::report::Report;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    violations: &'a [Violation],
}

#[derive(Serialize)]
struct Summary {
    files_checked: usize,
    files_skipped: usize,
    files_with_violations: usize,
    violations: usize,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                files_checked: report.files_checked(),
                files_skipped: report.files_skipped(),
                files_with_violations: report.files_with_violations().len(),
                violations: report.violations().len(),
            },
            violations: report.violations(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
