//! walletbook - wallet address book and recent activity
//!
//! CLI entry point.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

use clap::{CommandFactory, Parser};
use std::process::ExitCode;

use walletbook::cli::{Cli, Commands, OutputFormat};
use walletbook::core::logging;
use walletbook::storage::ResolvedConfig;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = cli
        .log_level
        .as_deref()
        .and_then(logging::LogLevel::from_arg)
        .or_else(|| logging::parse_log_level_from_env().map(logging::LogLevel::from_tracing_level))
        .unwrap_or_default();
    let log_format = if cli.json_output {
        logging::LogFormat::Json
    } else {
        logging::parse_log_format_from_env().unwrap_or_default()
    };
    let log_file = logging::parse_log_file_from_env();
    logging::init(log_level, log_format, log_file, cli.verbose);

    match run(&cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(error = %e, code = e.error_code(), "Command failed");
            // Config may be what failed, so fall back to the raw flags.
            let format = if cli.json {
                OutputFormat::Json
            } else {
                cli.format.unwrap_or_default()
            };
            let output =
                walletbook::render::error::render_error(&e, format, cli.no_color, cli.pretty);
            eprintln!("{output}");
            ExitCode::from(e.exit_code().as_u8())
        }
    }
}

fn run(cli: &Cli) -> walletbook::Result<String> {
    let Some(command) = &cli.command else {
        return Ok(Cli::command().render_help().to_string());
    };

    let activity_args = match command {
        Commands::Activity(args) => Some(args),
        Commands::Book(_) => None,
    };
    let mut config = ResolvedConfig::resolve(cli, activity_args)?;
    config.no_color = config.no_color || !walletbook::util::env::should_use_color(false);

    tracing::debug!(
        book = %config.book_path.display(),
        book_source = %config.sources.book_path,
        format = ?config.format,
        limit = config.activity.limit,
        "Resolved configuration"
    );

    match command {
        Commands::Book(cmd) => walletbook::cli::book::execute(cmd, &config),
        Commands::Activity(args) => walletbook::cli::activity::execute(args, &config),
    }
}
