//! Error types for the entire library.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in commands and main.rs.

use thiserror::Error;

/// Errors raised by an inspected-page collaborator
///
/// These propagate to the caller as-is; the aggregation itself never
/// produces them.
#[derive(Error, Debug)]
pub enum PageError {
    #[error("Failed to read capture: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid capture JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot was captured with different computed styles (expected {expected:?}, found {found:?})")]
    PropertyMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Node not found in snapshot: {0}")]
    NodeNotFound(i64),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur while loading a TOML config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}
