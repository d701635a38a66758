//! Centralized constants for the archive-automation workspace.
//!
//! Environment variable names live here so the loader, the CLI, and tests
//! agree on the exact spelling of each recognized key.

// =============================================================================
// Recognized environment variable names (exact, case-sensitive)
// =============================================================================

/// Primary data-store connection string.
pub const ENV_MDB_CONNECTION: &str = "MDB_CONNECTION";

/// Archive data-store connection string.
pub const ENV_MDB_CONNECTION_ARCHIVE: &str = "MDB_CONNECTION_ARCHIVE";

/// Target database name.
pub const ENV_MDB_DATABASE: &str = "MDB_DATABASE";

/// Target collection name.
pub const ENV_MDB_COLLECTION: &str = "MDB_COLLECTION";

/// Document-count limit. Kept as a string; consumers decide how to parse it.
pub const ENV_NUM_DOCS: &str = "NUM_DOCS";

/// Atlas API public key.
pub const ENV_API_PUBLIC_KEY: &str = "API_PUBLIC_KEY";

/// Atlas API private key.
pub const ENV_API_PRIVATE_KEY: &str = "API_PRIVATE_KEY";

/// Atlas project identifier.
pub const ENV_PROJECT_ID: &str = "PROJECT_ID";

/// Atlas cluster name.
pub const ENV_CLUSTER_NAME: &str = "CLUSTER_NAME";

/// All recognized keys, in canonical reporting order.
pub const RECOGNIZED_KEYS: [&str; 9] = [
    ENV_MDB_CONNECTION,
    ENV_MDB_CONNECTION_ARCHIVE,
    ENV_MDB_DATABASE,
    ENV_MDB_COLLECTION,
    ENV_NUM_DOCS,
    ENV_API_PUBLIC_KEY,
    ENV_API_PRIVATE_KEY,
    ENV_PROJECT_ID,
    ENV_CLUSTER_NAME,
];

// =============================================================================
// Output
// =============================================================================

/// Confirmation line printed to stdout after every load.
pub const SETTINGS_LOADED_MESSAGE: &str = "Settings loaded from .env file.";
