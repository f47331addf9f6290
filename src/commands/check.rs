use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::EXIT_CONFIG_ERROR;
use crate::checker::Violation;
use crate::cli::{CheckArgs, Cli};
use crate::config::validate_config_semantics;
use crate::output::{
    JsonFormatter, OutputFormat, OutputFormatter, PathListFormatter, ScanProgress, TextFormatter,
};
use crate::report::Report;
use crate::source::SourceFile;

use super::context::{
    CheckContext, Subsystems, apply_cli_overrides, color_choice_to_mode, load_config,
    write_output,
};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli, subsystems: Subsystems) -> i32 {
    match run_check_impl(args, cli, subsystems) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

pub(crate) fn run_check_impl(
    args: &CheckArgs,
    cli: &Cli,
    subsystems: Subsystems,
) -> crate::Result<i32> {
    // 1. Load configuration and apply CLI overrides
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config, args);
    validate_config_semantics(&config)?;

    // 2. Build the checkers and resolve the file set
    let subsystems = subsystems.with_config(&config);
    let ctx = CheckContext::from_config(&config, &args.root, subsystems)?;
    let files = ctx.resolver.resolve(&ctx.roots)?;
    info!(
        "Checking {} files under {} (style: {}, error codes: {})",
        files.len(),
        ctx.root.display(),
        subsystems.style,
        subsystems.error_codes
    );

    // 3. Check every file and aggregate
    let report = check_files(&ctx, &files, cli.quiet);

    // 4. Format and emit
    let output = format_report(&report, args, cli)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    Ok(report.exit_code())
}

/// Run every checker over every file in parallel.
///
/// Files that cannot be read are logged and counted, never fatal.
pub(crate) fn check_files(ctx: &CheckContext, files: &[PathBuf], quiet: bool) -> Report {
    let progress = ScanProgress::new(files.len() as u64, quiet);

    let outcomes: Vec<Option<Vec<Violation>>> = files
        .par_iter()
        .map(|relative| {
            let outcome = check_file(ctx, relative);
            progress.inc();
            outcome
        })
        .collect();
    progress.finish();

    let skipped = outcomes.iter().filter(|o| o.is_none()).count();
    let checked = outcomes.len() - skipped;
    let violations = outcomes.into_iter().flatten().flatten().collect();

    Report::new(violations, checked, skipped)
}

fn check_file(ctx: &CheckContext, relative: &Path) -> Option<Vec<Violation>> {
    let file = match SourceFile::read(&ctx.root, relative) {
        Ok(file) => file,
        Err(e) => {
            warn!("Skipping file: {e}");
            return None;
        }
    };

    let violations: Vec<_> = ctx
        .checkers
        .iter()
        .flat_map(|checker| checker.check(&file))
        .collect();
    debug!(
        "{}: {} lines, {} violations",
        relative.display(),
        file.line_count(),
        violations.len()
    );
    Some(violations)
}

fn format_report(report: &Report, args: &CheckArgs, cli: &Cli) -> crate::Result<String> {
    if args.files_with_violations {
        return PathListFormatter.format(report);
    }

    match args.format {
        OutputFormat::Text => TextFormatter::new(color_choice_to_mode(cli.color)).format(report),
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
