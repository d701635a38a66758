//! Command-line argument definitions for archive-cli.
//!
//! Responsibilities:
//! - Define the CLI surface (global flags, subcommands) using clap derive.
//!
//! Does NOT handle:
//! - Command execution (see commands.rs).
//!
//! Invariants:
//! - A bare invocation (no subcommand) performs exactly one settings load.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Load and inspect archive-automation settings.
#[derive(Parser)]
#[command(name = "archive-cli", version, about)]
pub struct Cli {
    /// Explicit path to the env file (defaults to ./.env discovery).
    #[arg(long, global = true, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report which recognized settings resolved, without printing values.
    Check {
        /// Output format for the report.
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

/// Output format for the `check` report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned key/status table.
    Table,
    /// JSON array of key/status objects.
    Json,
}
