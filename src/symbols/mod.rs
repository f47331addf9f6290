//! Error-code declaration consistency.
//!
//! Every translation unit redeclares the error codes it uses as
//! `extern const int NAME;` and references them as `ErrorCodes::NAME`.
//! Both sides are collected and compared within a single file only.

mod consistency;
mod extractor;

pub use consistency::ConsistencyChecker;
pub use extractor::{ExtractedSymbols, SymbolDeclaration, SymbolExtractor, SymbolUsage};
