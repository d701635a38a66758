//! Environment variable resolution for the recognized keys.
//!
//! Responsibilities:
//! - Read the nine recognized environment variables.
//! - Apply their values to a `SettingsLoader` instance.
//! - Provide the shared helper for reading env vars with empty/whitespace
//!   filtering.
//!
//! Does NOT handle:
//! - `.env` file loading (handled by `SettingsLoader::load_dotenv`).
//! - Building the final `Settings` (see builder.rs).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - No value is parsed or validated; all nine are plain strings.

use secrecy::SecretString;

use super::builder::SettingsLoader;
use crate::constants::{
    ENV_API_PRIVATE_KEY, ENV_API_PUBLIC_KEY, ENV_CLUSTER_NAME, ENV_MDB_COLLECTION,
    ENV_MDB_CONNECTION, ENV_MDB_CONNECTION_ARCHIVE, ENV_MDB_DATABASE, ENV_NUM_DOCS,
    ENV_PROJECT_ID,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            // Trimming was needed, allocate new String
            Some(trimmed.to_string())
        }
    })
}

/// Apply the recognized environment variables to the loader.
///
/// Values found in the environment replace whatever the loader currently
/// holds; builder setters applied after `from_env` keep the last word.
pub(crate) fn apply_env(loader: &mut SettingsLoader) {
    if let Some(connection) = env_var_or_none(ENV_MDB_CONNECTION) {
        loader.set_primary_connection(Some(SecretString::new(connection.into())));
    }
    if let Some(connection) = env_var_or_none(ENV_MDB_CONNECTION_ARCHIVE) {
        loader.set_archive_connection(Some(SecretString::new(connection.into())));
    }
    if let Some(database) = env_var_or_none(ENV_MDB_DATABASE) {
        loader.set_database(Some(database));
    }
    if let Some(collection) = env_var_or_none(ENV_MDB_COLLECTION) {
        loader.set_collection(Some(collection));
    }
    if let Some(limit) = env_var_or_none(ENV_NUM_DOCS) {
        loader.set_document_limit(Some(limit));
    }
    if let Some(key) = env_var_or_none(ENV_API_PUBLIC_KEY) {
        loader.set_api_public_key(Some(key));
    }
    if let Some(key) = env_var_or_none(ENV_API_PRIVATE_KEY) {
        loader.set_api_private_key(Some(SecretString::new(key.into())));
    }
    if let Some(project) = env_var_or_none(ENV_PROJECT_ID) {
        loader.set_project_id(Some(project));
    }
    if let Some(cluster) = env_var_or_none(ENV_CLUSTER_NAME) {
        loader.set_cluster_name(Some(cluster));
    }
}
