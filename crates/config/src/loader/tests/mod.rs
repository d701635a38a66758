//! Tests for the settings loader builder.
//!
//! Responsibilities:
//! - Test builder methods and direct injection.
//! - Test `.env` file loading and the `DOTENV_DISABLED` gate.
//! - Test environment variable handling and precedence.
//!
//! Does NOT handle:
//! - Direct `env_var_or_none` parsing behavior (tested in env.rs).
//! - Public API surface tests (see the crate-level tests/ directory).
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Tests that assert on unset keys clear all nine recognized keys first.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

pub mod dotenv_tests;

use crate::constants::RECOGNIZED_KEYS;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Run `f` with all nine recognized keys removed from the environment.
///
/// Whatever the closure sets (directly or via dotenv loading) is restored
/// to the pre-call state afterwards.
pub fn with_clean_settings_env<F: FnOnce()>(f: F) {
    let cleared: Vec<(&str, Option<&str>)> =
        RECOGNIZED_KEYS.iter().map(|key| (*key, None)).collect();
    temp_env::with_vars(cleared, f);
}
