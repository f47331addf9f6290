use std::fmt::Write;

use crate::checker::Violation;
use crate::error::Result;
use crate::report::Report;

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

/// `path:line: category: message`, one per line, then a summary.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn format_violation(&self, violation: &Violation, output: &mut String) {
        let category_color = if violation.category.is_error_code() {
            ansi::RED
        } else {
            ansi::YELLOW
        };
        let _ = writeln!(
            output,
            "{}:{}: {}: {}",
            violation.path.display(),
            violation.line,
            self.paint(violation.category.name(), category_color),
            violation.message
        );
    }

    fn format_summary(&self, report: &Report) -> String {
        if report.is_clean() {
            let files = report.files_checked();
            return self.paint(
                &format!("No violations found ({files} files checked)"),
                ansi::GREEN,
            );
        }

        let count = report.violations().len();
        let files = report.files_with_violations().len();
        self.paint(
            &format!(
                "{count} {} in {files} {}",
                plural(count, "violation"),
                plural(files, "file")
            ),
            ansi::RED,
        )
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{noun}s")
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        for violation in report.violations() {
            self.format_violation(violation, &mut output);
        }

        if !report.is_clean() {
            output.push('\n');
        }
        let _ = writeln!(output, "{}", self.format_summary(report));
        if report.files_skipped() > 0 {
            let _ = writeln!(
                output,
                "{} unreadable {} skipped",
                report.files_skipped(),
                plural(report.files_skipped(), "file")
            );
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
