//! Settings loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `SettingsLoader` for resolving the recognized
//!   keys from `.env` files, the process environment, and direct injection.
//! - Build the final immutable `Settings` snapshot.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Printing the confirmation line (see the `load` entry points in mod.rs).
//!
//! Invariants / Assumptions:
//! - The ambient environment takes precedence over `.env` file values
//!   (dotenvy never overwrites variables that are already set).
//! - Builder setters applied after `from_env()` take precedence over
//!   environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy` is invoked.

use secrecy::SecretString;
use std::path::PathBuf;

use super::env::apply_env;
use super::error::SettingsError;
use crate::types::Settings;

/// Builder that resolves settings from `.env` files, the process
/// environment, and direct injection.
#[derive(Default)]
pub struct SettingsLoader {
    primary_connection: Option<SecretString>,
    archive_connection: Option<SecretString>,
    database: Option<String>,
    collection: Option<String>,
    document_limit: Option<String>,
    api_public_key: Option<String>,
    api_private_key: Option<SecretString>,
    project_id: Option<String>,
    cluster_name: Option<String>,
    env_file: Option<PathBuf>,
}

impl SettingsLoader {
    /// Create a new settings loader with every slot empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Merge the `.env` file into the process environment, if present.
    ///
    /// Discovery starts from the current working directory unless an
    /// explicit file was supplied via [`with_env_file`](Self::with_env_file).
    /// Variables already present in the environment are left untouched, so
    /// the ambient environment wins over the file.
    ///
    /// If the `DOTENV_DISABLED` environment variable is set to "true" or
    /// "1", the `.env` file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`SettingsError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`SettingsError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent
    /// secret leakage.
    pub fn load_dotenv(self) -> Result<Self, SettingsError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        let loaded = match &self.env_file {
            Some(path) => dotenvy::from_path(path),
            None => dotenvy::dotenv().map(|_| ()),
        };

        match loaded {
            Ok(()) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(SettingsError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(SettingsError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(SettingsError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Use an explicit env file instead of working-directory discovery.
    pub fn with_env_file(mut self, path: PathBuf) -> Self {
        self.env_file = Some(path);
        self
    }

    /// Read the recognized keys from the process environment.
    ///
    /// Applied after `load_dotenv()`, this sees both ambient variables and
    /// whatever the file contributed. Empty and whitespace-only values are
    /// treated as unset.
    pub fn from_env(mut self) -> Self {
        apply_env(&mut self);
        self
    }

    /// Set the primary data-store connection string.
    pub fn with_primary_connection(mut self, connection: String) -> Self {
        self.primary_connection = Some(SecretString::new(connection.into()));
        self
    }

    /// Set the archive data-store connection string.
    pub fn with_archive_connection(mut self, connection: String) -> Self {
        self.archive_connection = Some(SecretString::new(connection.into()));
        self
    }

    /// Set the target database name.
    pub fn with_database(mut self, database: String) -> Self {
        self.database = Some(database);
        self
    }

    /// Set the target collection name.
    pub fn with_collection(mut self, collection: String) -> Self {
        self.collection = Some(collection);
        self
    }

    /// Set the document-count limit (kept as a string).
    pub fn with_document_limit(mut self, limit: String) -> Self {
        self.document_limit = Some(limit);
        self
    }

    /// Set the Atlas API public key.
    pub fn with_api_public_key(mut self, key: String) -> Self {
        self.api_public_key = Some(key);
        self
    }

    /// Set the Atlas API private key.
    pub fn with_api_private_key(mut self, key: String) -> Self {
        self.api_private_key = Some(SecretString::new(key.into()));
        self
    }

    /// Set the Atlas project identifier.
    pub fn with_project_id(mut self, project_id: String) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Set the Atlas cluster name.
    pub fn with_cluster_name(mut self, cluster_name: String) -> Self {
        self.cluster_name = Some(cluster_name);
        self
    }

    /// Build the final settings snapshot.
    ///
    /// Infallible: no key is required and nothing is validated here.
    /// Consumers that need a value check for presence themselves.
    pub fn build(self) -> Settings {
        Settings {
            primary_connection: self.primary_connection,
            archive_connection: self.archive_connection,
            database: self.database,
            collection: self.collection,
            document_limit: self.document_limit,
            api_public_key: self.api_public_key,
            api_private_key: self.api_private_key,
            project_id: self.project_id,
            cluster_name: self.cluster_name,
        }
    }

    // Internal setters for use by other loader modules

    pub(crate) fn set_primary_connection(&mut self, connection: Option<SecretString>) {
        self.primary_connection = connection;
    }

    pub(crate) fn set_archive_connection(&mut self, connection: Option<SecretString>) {
        self.archive_connection = connection;
    }

    pub(crate) fn set_database(&mut self, database: Option<String>) {
        self.database = database;
    }

    pub(crate) fn set_collection(&mut self, collection: Option<String>) {
        self.collection = collection;
    }

    pub(crate) fn set_document_limit(&mut self, limit: Option<String>) {
        self.document_limit = limit;
    }

    pub(crate) fn set_api_public_key(&mut self, key: Option<String>) {
        self.api_public_key = key;
    }

    pub(crate) fn set_api_private_key(&mut self, key: Option<SecretString>) {
        self.api_private_key = key;
    }

    pub(crate) fn set_project_id(&mut self, project_id: Option<String>) {
        self.project_id = project_id;
    }

    pub(crate) fn set_cluster_name(&mut self, cluster_name: Option<String>) {
        self.cluster_name = cluster_name;
    }
}
