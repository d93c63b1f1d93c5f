//! Core error types for cadence-core.
//!
//! All fallible operations in the library surface one of the error kinds
//! below, rolled up into [`CoreError`] at the crate boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for cadence-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid timer preset input
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Preset store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors for timer preset input.
///
/// Returned synchronously to the caller; never retried.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required text field was blank
    #[error("Field '{0}' must not be empty")]
    Empty(&'static str),

    /// Invalid numeric value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        field: &'static str,
        message: String,
    },
}

/// Preset-store-specific errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read/write presets file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse presets TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize presets TOML: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Timer preset '{0}' not found")]
    NotFound(String),

    #[error("Invalid timer preset: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Failed to access data directory: {0}")]
    DataDir(String),
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

    /// Unknown dot-path key passed to get/set
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Value cannot be coerced to the key's type
    #[error("Cannot parse '{value}' for key '{key}': {message}")]
    InvalidValue {
        key: String,
        value: String,
        message: String,
    },

    /// Failed to access data directory
    #[error("Failed to access data directory: {0}")]
    DataDir(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
