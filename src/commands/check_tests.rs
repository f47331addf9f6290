use std::fs;
use std::path::Path;

use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::config::Config;
use crate::{EXIT_SUCCESS, EXIT_VIOLATIONS_FOUND};

fn parse(args: &[&str]) -> Cli {
    Cli::parse_from(
        ["style-guard", "--no-config", "--quiet", "--color", "never", "check"]
            .iter()
            .chain(args),
    )
}

fn check_args(cli: &Cli) -> &CheckArgs {
    match &cli.command {
        crate::cli::Commands::Check(args) => args,
        _ => panic!("Expected Check command"),
    }
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn run(root: &Path, extra: &[&str], subsystems: Subsystems) -> (i32, String) {
    let output = root.join("report.txt");
    let root_str = root.to_str().unwrap();
    let output_str = output.to_str().unwrap();
    let mut args = vec!["--root", root_str, "-o", output_str];
    args.extend_from_slice(extra);

    let cli = parse(&args);
    let code = run_check_impl(check_args(&cli), &cli, subsystems).unwrap();
    (code, fs::read_to_string(output).unwrap())
}

#[test]
fn empty_repository_is_clean() {
    let temp_dir = TempDir::new().unwrap();

    let (code, output) = run(temp_dir.path(), &[], Subsystems::ALL);

    assert_eq!(code, EXIT_SUCCESS);
    assert_eq!(output, "No violations found (0 files checked)\n");
}

#[test]
fn clean_sources_pass() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        "src/Core/Field.h",
        "#pragma once\n\nnamespace DB\n{\n\nint answer();\n\n}\n",
    );

    let (code, output) = run(temp_dir.path(), &[], Subsystems::ALL);

    assert_eq!(code, EXIT_SUCCESS, "{output}");
    assert!(output.contains("1 files checked"));
}

#[test]
fn violations_are_reported_sorted() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "src/b.cpp", "int b;\t\n");
    write(temp_dir.path(), "src/a.cpp", "int a; \nif(x)\n");

    let (code, output) = run(temp_dir.path(), &[], Subsystems::ALL);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(code, EXIT_VIOLATIONS_FOUND);
    assert!(lines[0].starts_with("src/a.cpp:1: trailing-whitespace:"));
    assert!(lines[1].starts_with("src/a.cpp:2: control-paren-space:"));
    assert!(lines[2].starts_with("src/b.cpp:1: trailing-whitespace:"));
    assert!(lines[3].starts_with("src/b.cpp:1: tab:"));
}

#[test]
fn excluded_directories_are_not_checked() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "src/contrib/lib.cpp", "int x;\t\n");

    let (code, _) = run(temp_dir.path(), &[], Subsystems::ALL);

    assert_eq!(code, EXIT_SUCCESS);
}

#[test]
fn explicit_missing_root_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_str().unwrap();

    let cli = parse(&["--root", root, "nope"]);
    let result = run_check_impl(check_args(&cli), &cli, Subsystems::ALL);

    assert!(result.is_err());
}

#[test]
fn invalid_exclude_regex_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_str().unwrap();

    let cli = parse(&["--root", root, "--exclude-regex", "(oops"]);

    assert_eq!(
        run_check(check_args(&cli), &cli, Subsystems::ALL),
        EXIT_CONFIG_ERROR
    );
}

#[test]
fn style_subsystem_ignores_error_codes() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        "src/Errors.cpp",
        "namespace ErrorCodes\n{\n    extern const int UNUSED_CODE;\n}\n",
    );

    let (style_code, _) = run(temp_dir.path(), &[], Subsystems::STYLE);
    let (codes_code, output) = run(temp_dir.path(), &[], Subsystems::ERROR_CODES);

    assert_eq!(style_code, EXIT_SUCCESS);
    assert_eq!(codes_code, EXIT_VIOLATIONS_FOUND);
    assert!(output.starts_with("src/Errors.cpp:3: unused-error-code:"));
}

#[test]
fn disabled_category_is_not_reported() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "src/a.cpp", "int a; \n");

    let (code, _) = run(temp_dir.path(), &["--disable", "trailing-whitespace"], Subsystems::ALL);

    assert_eq!(code, EXIT_SUCCESS);
}

#[test]
fn files_with_violations_lists_style_paths_only() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "src/a.cpp", "int a; \nint b; \n");
    write(temp_dir.path(), "src/b.cpp", "int b = ErrorCodes::MISSING;\n");

    let (code, output) = run(temp_dir.path(), &["--files-with-violations"], Subsystems::ALL);

    assert_eq!(code, EXIT_VIOLATIONS_FOUND);
    assert_eq!(output, "src/a.cpp\n");
}

#[test]
fn json_output_is_parseable() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "src/a.cpp", "int a; \n");

    let (_, output) = run(temp_dir.path(), &["--format", "json"], Subsystems::ALL);
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["summary"]["violations"], 1);
    assert_eq!(parsed["violations"][0]["category"], "trailing-whitespace");
}

#[test]
fn repeated_runs_are_identical() {
    let temp_dir = TempDir::new().unwrap();
    for i in 0..20 {
        write(temp_dir.path(), &format!("src/f{i}.cpp"), "if(x) \n");
    }

    let (_, first) = run(temp_dir.path(), &[], Subsystems::ALL);
    let (_, second) = run(temp_dir.path(), &[], Subsystems::ALL);

    assert_eq!(first, second);
}

#[test]
fn check_files_counts_unreadable_as_skipped() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "src/a.cpp", "int a;\n");
    let ctx = CheckContext::from_config(&Config::default(), temp_dir.path(), Subsystems::ALL)
        .unwrap();

    let files = vec![PathBuf::from("src/a.cpp"), PathBuf::from("src/gone.cpp")];
    let report = check_files(&ctx, &files, true);

    assert_eq!(report.files_checked(), 1);
    assert_eq!(report.files_skipped(), 1);
    assert!(report.is_clean());
}
