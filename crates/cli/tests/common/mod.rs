//! Shared test utilities for archive-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Clear the recognized settings keys so the host environment cannot leak
//!   into assertions.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - Tests that want dotenv loading remove `DOTENV_DISABLED` themselves.

use assert_cmd::Command;

/// The nine recognized settings keys, mirrored here so the test helper does
/// not depend on the library crate.
pub const SETTINGS_KEYS: [&str; 9] = [
    "MDB_CONNECTION",
    "MDB_CONNECTION_ARCHIVE",
    "MDB_DATABASE",
    "MDB_COLLECTION",
    "NUM_DOCS",
    "API_PUBLIC_KEY",
    "API_PRIVATE_KEY",
    "PROJECT_ID",
    "CLUSTER_NAME",
];

/// Returns a hermetic `archive-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - All recognized settings keys are cleared to ensure no leakage from the
///   host environment.
/// - `RUST_LOG` is cleared so diagnostics cannot pollute output assertions.
pub fn archive_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("archive-cli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    for key in SETTINGS_KEYS {
        cmd.env_remove(key);
    }
    cmd.env_remove("RUST_LOG");

    cmd
}

/// The exact confirmation line the loader prints on every load.
#[allow(dead_code)]
pub const CONFIRMATION_LINE: &str = "Settings loaded from .env file.";
