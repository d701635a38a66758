//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that automation scripts can rely on.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Missing settings values are never an error; only an unreadable or
//!   malformed env file fails an invocation.

/// Structured exit codes for archive-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - the env file was unreadable or malformed, or the
    /// report could not be produced.
    GeneralError = 1,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}
