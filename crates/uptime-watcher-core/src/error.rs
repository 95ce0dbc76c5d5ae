//! Core error types for uptime-watcher-core.
//!
//! Every fault in the reminder subsystem is recoverable: the sampler retries
//! boot-time failures, persistence failures are logged and retried on the
//! next write, and restart failures are handed back to the presenter.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for uptime-watcher-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Persisted reminder state could not be read or written
    #[error("State store error: {0}")]
    Store(#[from] StoreError),

    /// Settings file errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Boot time query failed
    #[error("Boot time source error: {0}")]
    Source(#[from] SourceError),

    /// OS restart failed
    #[error("Restart error: {0}")]
    Restart(#[from] RestartError),

    /// A user response was rejected by the engine
    #[error("Response rejected: {0}")]
    Response(#[from] ResponseError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persistence failures for [`crate::storage::StateStore`].
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to access state file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse state file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Failed to serialize reminder state: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Settings-specific errors.
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

    /// Key does not exist in the settings schema
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Data directory could not be created
    #[error("Failed to prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Boot time query errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The OS query could not be completed
    #[error("System boot time is unavailable: {0}")]
    Unavailable(String),
}

/// Restart dispatch errors.
#[derive(Error, Debug)]
pub enum RestartError {
    /// The restart command ran and reported failure
    #[error("Restart command `{command}` failed with {status}")]
    CommandFailed { command: String, status: String },

    /// The restart command could not be started
    #[error("Failed to run restart command `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// No restart command is known for this platform
    #[error("Automatic restart is not supported on {0}")]
    Unsupported(String),
}

/// Rejected user responses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResponseError {
    /// A response arrived without a reminder being shown
    #[error("no reminder is awaiting a response")]
    NoPendingReminder,

    /// The postponement was not on the offered menu
    #[error("postponement of {duration_secs}s is not offered (total delay {total_delay_secs}s)")]
    NotOffered {
        duration_secs: u64,
        total_delay_secs: u64,
    },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
