//! Error types for ccgen-build.

use thiserror::Error;

/// Result type for ccgen-build operations.
pub type Result<T> = std::result::Result<T, GenError>;

/// Errors that can occur while generating a compilation database.
#[derive(Error, Debug)]
pub enum GenError {
    /// Directory listing, config read, or output write failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    ParseToml(#[from] toml::de::Error),

    /// Failed to parse or serialize JSON (compile_commands.json).
    #[error("Failed to process JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    /// Configuration validation error.
    #[error("Config validation error: {0}")]
    Validation(String),

    /// The package prefix lookup failed and the config says to abort.
    #[error("Prefix lookup for package `{package}` failed: {reason}")]
    PrefixLookup { package: String, reason: String },
}
