use std::path::Path;

use regex::Regex;

use crate::source::SourceFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolDeclaration<'a> {
    pub path: &'a Path,
    pub name: &'a str,
    pub line: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolUsage<'a> {
    pub path: &'a Path,
    pub name: &'a str,
    pub line: usize,
}

/// Declarations and usages of one file, in line order, duplicates kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedSymbols<'a> {
    pub declarations: Vec<SymbolDeclaration<'a>>,
    pub usages: Vec<SymbolUsage<'a>>,
}

pub struct SymbolExtractor {
    declaration: Regex,
    usage: Regex,
}

impl Default for SymbolExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            declaration: Regex::new(r"\bextern\s+const\s+int\s+([_A-Z]+)\s*;")
                .expect("Invalid regex"),
            usage: Regex::new(r"\bErrorCodes::([_A-Z]+)\b").expect("Invalid regex"),
        }
    }

    /// Collect symbols from every decodable line that is not a `//` comment.
    #[must_use]
    pub fn extract<'a>(&self, file: &'a SourceFile) -> ExtractedSymbols<'a> {
        let mut symbols = ExtractedSymbols::default();

        for record in file.lines() {
            let Some(text) = record.text else {
                continue;
            };
            if text.trim_start().starts_with("//") {
                continue;
            }

            symbols.declarations.extend(
                capture_names(&self.declaration, text).map(|name| SymbolDeclaration {
                    path: record.path,
                    name,
                    line: record.number,
                }),
            );
            symbols
                .usages
                .extend(capture_names(&self.usage, text).map(|name| SymbolUsage {
                    path: record.path,
                    name,
                    line: record.number,
                }));
        }

        symbols
    }
}

fn capture_names<'t>(pattern: &Regex, text: &'t str) -> impl Iterator<Item = &'t str> {
    pattern
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
#[path = "extractor_tests.rs"]
mod tests;
