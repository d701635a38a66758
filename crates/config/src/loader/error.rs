//! Error types for settings loading.
//!
//! Responsibilities:
//! - Define error variants for `.env` file failures.
//!
//! Does NOT handle:
//! - Missing files or missing keys (both are non-errors by contract).
//!
//! Invariants:
//! - Dotenv errors NEVER include raw `.env` line contents to prevent secret
//!   leakage.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur while merging a `.env` file.
///
/// Missing files and missing keys never surface here; only a file that
/// exists but cannot be read or parsed does.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from the dotenvy crate).
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
