//! Heuristic line-level style checks.
//!
//! Lines flow through the [`LineClassifier`] (an ordered list of
//! [`LinePredicate`]s) and then the [`ExclusionFilter`]. Checks that need more
//! than one line live in their own per-file accumulators.

mod blank_run;
mod classifier;
mod double_whitespace;
mod exclusion;

pub use blank_run::BlankRunAccumulator;
pub use classifier::{CategorySet, LineClassifier, LinePredicate, PatternPredicate, TabPredicate};
pub use double_whitespace::DoubleWhitespaceDetector;
pub use exclusion::{DEFAULT_EXCLUSION_SHAPES, ExclusionFilter};
