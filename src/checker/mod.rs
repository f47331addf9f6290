mod style;
mod violation;

pub use style::StyleChecker;
pub use violation::{Category, Violation};

use crate::source::SourceFile;

pub trait Checker {
    /// Check one file in isolation and return every finding in it.
    ///
    /// Implementations must not keep state between calls: files are checked
    /// in parallel and in no particular order.
    fn check(&self, file: &SourceFile) -> Vec<Violation>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
