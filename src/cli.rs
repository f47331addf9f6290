use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::checker::Category;
use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "style-guard")]
#[command(author, version, about = "Flag likely C++ style violations and inconsistent error codes")]
#[command(long_about = "Heuristic style checks for C++ sources, run before an auto-formatter,\n\
    plus a per-file consistency check of `extern const int` error codes.\n\n\
    Exit codes:\n  \
    0 - No violations\n  \
    1 - Violations found\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress report output; the exit code still reflects violations
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the style scanner and the error-code checker
    Check(CheckArgs),

    /// Run the style scanner only
    Style(CheckArgs),

    /// Run the error-code consistency checker only
    ErrorCodes(CheckArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Roots to scan, relative to --root (default: from config, or src base programs utils)
    pub paths: Vec<PathBuf>,

    /// Repository root
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File extensions to check (comma-separated, e.g., cpp,h)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Regex of root-relative paths to skip (replaces the configured one)
    #[arg(long)]
    pub exclude_regex: Option<String>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Style categories to skip (comma-separated, e.g., double-whitespace,blank-run)
    #[arg(long, value_delimiter = ',')]
    pub disable: Vec<Category>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print only the paths with style violations, one per line
    #[arg(long)]
    pub files_with_violations: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".style-guard.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and patterns
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = ".style-guard.toml")]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format [possible values: text, json]
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
