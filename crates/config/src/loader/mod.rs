//! Settings loader for environment variables and `.env` files.
//!
//! Responsibilities:
//! - Merge a dotenv-style file into the process environment.
//! - Resolve the nine recognized keys into an immutable `Settings` snapshot.
//! - Provide the `load()` entry points that announce completion on stdout.
//!
//! Does NOT handle:
//! - Validation or parsing of resolved values (consumers decide).
//! - Persisting settings anywhere.
//!
//! Invariants / Assumptions:
//! - The ambient environment takes precedence over `.env` file values.
//! - A missing `.env` file is not an error; missing keys resolve to `None`.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy` is invoked.

mod builder;
mod env;
mod error;

#[cfg(test)]
mod tests;

pub use builder::SettingsLoader;
pub use env::env_var_or_none;
pub use error::SettingsError;

use std::path::PathBuf;

use crate::constants::SETTINGS_LOADED_MESSAGE;
use crate::types::Settings;

/// Load settings from `./.env` and the process environment.
///
/// Prints the confirmation line to stdout after every load, whether or not
/// the file existed or any key resolved. Programs that need finer control
/// over the sequence use [`SettingsLoader`] directly.
///
/// # Errors
///
/// Fails only when a `.env` file exists but cannot be read or parsed.
pub fn load() -> Result<Settings, SettingsError> {
    Ok(announce(SettingsLoader::new().load_dotenv()?.from_env().build()))
}

/// Load settings from an explicit env file and the process environment.
///
/// Same contract as [`load`], with the file path supplied by the caller
/// instead of discovered from the working directory.
pub fn load_from(path: impl Into<PathBuf>) -> Result<Settings, SettingsError> {
    Ok(announce(
        SettingsLoader::new()
            .with_env_file(path.into())
            .load_dotenv()?
            .from_env()
            .build(),
    ))
}

fn announce(settings: Settings) -> Settings {
    println!("{SETTINGS_LOADED_MESSAGE}");
    tracing::debug!(resolved = settings.resolved_count(), "settings loaded");
    settings
}
