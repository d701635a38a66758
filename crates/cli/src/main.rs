//! archive-cli - operator entry point for archive-automation settings.
//!
//! Responsibilities:
//! - Load the `.env`-backed settings snapshot and announce completion.
//! - Report per-key resolution status via the `check` subcommand.
//!
//! Does NOT handle:
//! - Settings resolution logic (see the `archive-config` crate).
//! - Any data-store or Atlas API interaction (that belongs to the
//!   automation jobs that consume the snapshot).
//!
//! Invariants:
//! - The confirmation line is printed exactly once per invocation, by the
//!   library load entry point.
//! - Diagnostics go to stderr; stdout carries the confirmation line and,
//!   for `check`, the report.
//! - Secret values never reach stdout or stderr.

mod args;
mod commands;
mod error;

use args::{Cli, Commands};
use clap::Parser;
use error::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let loaded = match &cli.env_file {
        Some(path) => archive_config::load_from(path.clone()),
        None => archive_config::load(),
    };

    let settings = match loaded {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load environment: {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let exit_code = match cli.command {
        None => ExitCode::Success,
        Some(Commands::Check { format }) => match commands::run_check(&settings, format) {
            Ok(()) => ExitCode::Success,
            Err(e) => {
                eprintln!("{:#}", e);
                ExitCode::GeneralError
            }
        },
    };

    std::process::exit(exit_code.as_i32());
}
