//! Error types for the mindcare_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for mindcare_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An aggregate that needs at least one entry was asked about an empty store
    #[error("No mood entries logged yet")]
    EmptyStore,

    /// Entry field outside its declared bounds (caller-side check)
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    /// Unrecognised mood symbol, name or rank
    #[error("Invalid mood: {0}")]
    InvalidMood(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog validation error
    #[error("Catalog validation error: {0}")]
    CatalogValidation(String),
}
