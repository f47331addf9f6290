#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the style-guard binary.
#[macro_export]
macro_rules! style_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("style-guard"))
    };
}

/// A temporary repository root for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content, creating parent directories.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn create_dir(&self, relative_path: &str) {
        fs::create_dir_all(self.dir.path().join(relative_path))
            .expect("Failed to create directory");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".style-guard.toml", content);
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A header that passes every style check.
pub const CLEAN_HEADER: &str = "#pragma once

namespace DB
{

int answer();

}
";

/// Declares and uses the same error code.
pub const CONSISTENT_ERROR_CODES: &str = "namespace ErrorCodes
{
    extern const int BAD_ARGUMENTS;
}

void check()
{
    throw Exception(ErrorCodes::BAD_ARGUMENTS);
}
";

/// One unused, one undefined and one duplicated error code.
pub const INCONSISTENT_ERROR_CODES: &str = "namespace ErrorCodes
{
    extern const int LOGICAL_ERROR;
    extern const int UNUSED_CODE;
    extern const int LOGICAL_ERROR;
}

void check()
{
    throw Exception(ErrorCodes::LOGICAL_ERROR);
    throw Exception(ErrorCodes::NOT_DECLARED);
}
";
