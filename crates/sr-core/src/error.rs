//! Error types for sr-core

use thiserror::Error;

/// Core error type for Schemareset
#[derive(Error, Debug)]
pub enum CoreError {
    /// R001: Configuration file not found
    #[error("[R001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// R002: Failed to parse configuration file
    #[error("[R002] Failed to parse config: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// R003: Invalid configuration value
    #[error("[R003] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// R004: Migrations directory missing or unreadable
    #[error("[R004] Cannot read migrations directory '{path}': {source}")]
    MigrationsDirUnreadable {
        path: String,
        source: std::io::Error,
    },

    /// R005: A single migration file could not be read
    #[error("[R005] Failed to read migration '{path}': {source}")]
    MigrationUnreadable {
        path: String,
        source: std::io::Error,
    },

    /// R006: Destination could not be written
    #[error("[R006] Failed to write reset script '{path}': {source}")]
    OutputWrite {
        path: String,
        source: std::io::Error,
    },

    /// R007: Header template failed to render
    #[error("[R007] Header render error: {0}")]
    Template(String),

    /// R008: IO error with file path context
    #[error("[R008] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl From<minijinja::Error> for CoreError {
    fn from(err: minijinja::Error) -> Self {
        CoreError::Template(err.to_string())
    }
}
