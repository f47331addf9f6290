use regex::Regex;

/// Finds runs of two or more spaces in the middle of a line.
///
/// Leading indentation and gaps before a `//` comment or at the end of the
/// line are not gaps. A gap is accepted as alignment when the line above or
/// below has an alignment boundary (`' '` or `'-'` followed by a non-space)
/// at the gap's last column. Numeric tables like `{ 10,  -1,   2 }` are ignored.
#[derive(Debug, Clone)]
pub struct DoubleWhitespaceDetector {
    space_run: Regex,
    number_table: Regex,
}

impl Default for DoubleWhitespaceDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl DoubleWhitespaceDetector {
    #[must_use]
    pub fn new() -> Self {
        Self {
            space_run: Regex::new(r"( {2,})[^ /]").expect("Invalid regex"),
            number_table: Regex::new(r"(-?\d+\w*,\s+){3,}").expect("Invalid regex"),
        }
    }

    /// Check `line` against its neighbours. Callers skip the first and last line of a file.
    #[must_use]
    pub fn is_violation(&self, previous: &str, line: &str, next: &str) -> bool {
        if self.number_table.is_match(line) {
            return false;
        }

        self.gap_columns(line)
            .any(|column| !is_alignment_at(previous, column) && !is_alignment_at(next, column))
    }

    /// Last column of every mid-line gap.
    fn gap_columns<'a>(&'a self, line: &'a str) -> impl Iterator<Item = usize> + 'a {
        self.space_run
            .captures_iter(line)
            .filter_map(|c| c.get(1))
            .filter(|gap| !line[..gap.start()].trim().is_empty())
            .map(|gap| gap.end() - 1)
    }
}

fn is_alignment_at(neighbour: &str, column: usize) -> bool {
    let bytes = neighbour.as_bytes();
    matches!(
        (bytes.get(column), bytes.get(column + 1)),
        (Some(b' ' | b'-'), Some(c)) if *c != b' '
    )
}

#[cfg(test)]
#[path = "double_whitespace_tests.rs"]
mod tests;
