use crate::source::LineRecord;

/// Counts consecutive blank lines within one file.
///
/// Create one per file; the counter must never carry over a file boundary.
#[derive(Debug, Default)]
pub struct BlankRunAccumulator {
    run: usize,
}

impl BlankRunAccumulator {
    pub const MAX_BLANK_LINES: usize = 2;

    #[must_use]
    pub const fn new() -> Self {
        Self { run: 0 }
    }

    /// Feed the next line. Returns `true` exactly once per run, on the line
    /// that first exceeds [`Self::MAX_BLANK_LINES`].
    pub fn observe(&mut self, line: &LineRecord<'_>) -> bool {
        if line.is_blank() {
            self.run += 1;
            self.run == Self::MAX_BLANK_LINES + 1
        } else {
            self.run = 0;
            false
        }
    }
}

#[cfg(test)]
#[path = "blank_run_tests.rs"]
mod tests;
