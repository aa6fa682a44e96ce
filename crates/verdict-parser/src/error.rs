//! Parser error types

use thiserror::Error;

/// Parser error
#[derive(Error, Debug)]
pub enum ParseError {
    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Missing required field
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A rule entry failed deserialization
    #[error("Invalid rule at index {index}: {message}")]
    InvalidRule { index: usize, message: String },

    /// Document is not shaped like a rule document
    #[error("Invalid rule document: {0}")]
    InvalidDocument(String),
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;
