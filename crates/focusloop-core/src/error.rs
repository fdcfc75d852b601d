//! Core error types for focusloop-core.
//!
//! Nothing in this system is fatal: every error here degrades a single
//! feature. Callers surface validation errors to the user and log the rest.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for focusloop-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Synchronization errors
    #[error("Sync error: {0}")]
    Sync(#[from] SyncError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open database connection
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Database is locked
    #[error("Database is locked")]
    Locked,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Validation errors. Rejected locally with no state mutation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Task text is empty after trimming
    #[error("Task text must not be empty")]
    EmptyTaskText,

    /// Calendar note is empty after trimming
    #[error("Calendar note must not be empty")]
    EmptyNote,

    /// Username is empty
    #[error("Username must not be empty")]
    EmptyUsername,

    /// Password is empty
    #[error("Password must not be empty")]
    EmptyPassword,

    /// Sign-up with a username that already exists
    #[error("Username '{0}' is already taken")]
    UsernameTaken(String),

    /// Sign-in with an unknown username or wrong password
    #[error("Unknown username or wrong password")]
    BadCredentials,

    /// Invalid value for a field
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        field: &'static str,
        message: String,
    },
}

/// Synchronization errors. A sync failure never terminates the session;
/// the viewer keeps its last-known list.
#[derive(Error, Debug)]
pub enum SyncError {
    /// Failed to reach the relay
    #[error("Failed to connect to relay: {0}")]
    Connect(#[source] std::io::Error),

    /// Connection closed by the peer
    #[error("Connection closed by peer")]
    Disconnected,

    /// A message that did not parse
    #[error("Malformed message: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Write to the relay failed
    #[error("Send failed: {0}")]
    Send(#[source] std::io::Error),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked {
                    StorageError::Locked
                } else {
                    StorageError::QueryFailed(err.to_string())
                }
            }
            _ => StorageError::QueryFailed(err.to_string()),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
