use clap::Parser;
use tracing::debug;

use style_guard::cli::{Cli, Commands};
use style_guard::commands::{Subsystems, run_check, run_config, run_init};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli, Subsystems::ALL),
        Commands::Style(args) => run_check(args, &cli, Subsystems::STYLE),
        Commands::ErrorCodes(args) => run_check(args, &cli, Subsystems::ERROR_CODES),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}

/// Logs go to stderr so that stdout carries only the report.
fn init_logging(verbose: u8) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).without_time())
        .with(filter)
        .try_init();

    debug!("Logging initialized at level: {level}");
}
