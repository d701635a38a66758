//! Command implementations for archive-cli.
//!
//! Responsibilities:
//! - Render the per-key resolution report for the `check` subcommand.
//!
//! Does NOT handle:
//! - Settings resolution (see the `archive-config` crate).
//!
//! Invariants:
//! - Reports carry key names and presence only; values never reach output.

use anyhow::Result;
use archive_config::Settings;

use crate::args::OutputFormat;

/// Print the per-key resolution report to stdout.
///
/// Absent values are not an error; the command succeeds regardless of how
/// many keys resolved.
pub fn run_check(settings: &Settings, format: OutputFormat) -> Result<()> {
    let summary = settings.summary();

    if settings.resolved_count() == 0 {
        tracing::warn!(
            "no recognized settings resolved; consuming jobs will see nothing but empty values"
        );
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Table => {
            let width = summary
                .iter()
                .map(|status| status.key.len())
                .max()
                .unwrap_or(0);
            for status in &summary {
                let state = if status.set { "set" } else { "unset" };
                println!("{:<width$}  {}", status.key, state);
            }
        }
    }

    Ok(())
}
