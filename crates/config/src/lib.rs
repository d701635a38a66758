//! Settings management for archive automation.
//!
//! This crate resolves the fixed set of archive-automation settings from a
//! `.env` file and the process environment into an immutable `Settings`
//! snapshot that automation jobs receive by reference.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{SettingsError, SettingsLoader, env_var_or_none, load, load_from};
pub use types::{KeyStatus, Settings};
